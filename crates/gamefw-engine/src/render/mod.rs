//! Per-frame driver.
//!
//! The renderer does not draw. It walks a [`State`](crate::State)'s object
//! store once per frame, letting every [`GameObject`] update and then render
//! itself in ascending z order.

mod object;
mod renderer;

pub use object::GameObject;
pub use renderer::{FrameStats, Renderer};
