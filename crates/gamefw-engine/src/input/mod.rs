//! Input handlers.
//!
//! The host translates platform events into [`InputEvent`]s and feeds them to
//! a [`KeyHandler`] / [`MouseHandler`]. Each handler tracks what is held and
//! publishes transitions on its own [`EventBus`](gamefw_core::EventBus) under
//! the ids in [`names`].

mod key_handler;
mod mouse_handler;
pub mod names;
mod types;

pub use key_handler::KeyHandler;
pub use mouse_handler::MouseHandler;
pub use types::{ButtonState, InputEvent, Key, MouseButton};

use gamefw_core::events::EventArg;

/// Key carried by the first argument of a `keydown` / `keyup` trigger.
pub fn key_arg(args: &[EventArg]) -> Option<Key> {
    args.first()?.downcast_ref::<Key>().copied()
}

/// Button carried by the first argument of a `mousedown` / `mouseup` trigger.
pub fn button_arg(args: &[EventArg]) -> Option<MouseButton> {
    args.first()?.downcast_ref::<MouseButton>().copied()
}
