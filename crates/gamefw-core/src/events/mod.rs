//! Named event dispatch.
//!
//! Responsibilities:
//! - keep one independent event table per [`EventBus`] instance
//! - invoke subscribers synchronously, in bind order
//! - resolve the optional scope/argument pair of a trigger call
//!
//! The default API never fails: bad input and unknown ids are silent no-ops.
//! The `try_*` variants report the same conditions as [`EventError`].

mod args;
mod bus;
mod error;
mod scope;

pub use args::EventArg;
pub use bus::{Dispatch, EventBus, HandlerFailure, SubscriptionId};
pub use error::EventError;
pub use scope::{Scope, ScopeArg};
