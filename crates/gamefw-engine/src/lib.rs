//! gamefw engine crate.
//!
//! Builds the game-facing pieces on top of `gamefw-core`: input handlers that
//! publish through an event bus, a game state owning an object store, and a
//! renderer that drives the per-frame update/render pass.
//!
//! Drawing, canvas management and platform input capture are left to the host.

pub mod camera;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod state;

pub use camera::Camera;
pub use config::FrameworkConfig;
pub use render::{GameObject, Renderer};
pub use state::State;
