//! Logging utilities.
//!
//! Libraries in this workspace only emit through the `log` facade; a binary
//! picks the backend by calling [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
