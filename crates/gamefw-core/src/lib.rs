//! Core building blocks of the gamefw 2D framework.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`events`] | `EventBus`: named publish/subscribe dispatcher |
//! | [`store`] | `ObjectStore`: keyed entries kept in ascending z order |
//!
//! Both types are single-threaded and synchronous. A host that shares them
//! across threads must confine each instance to one task or wrap it in a lock.
//!
//! # Quick start
//!
//! ```rust
//! use gamefw_core::events::{EventArg, EventBus};
//!
//! let mut bus = EventBus::new();
//! bus.bind("score", "hud", |_scope, args| {
//!     assert_eq!(args, &[EventArg::Int(10)]);
//!     Ok(())
//! });
//! let report = bus.trigger_args("score", &[EventArg::Int(10)]);
//! assert_eq!(report.invoked, 1);
//! ```

pub mod events;
pub mod store;

pub use events::{EventBus, EventError};
pub use store::{Layered, ObjectStore, ZIndex};
