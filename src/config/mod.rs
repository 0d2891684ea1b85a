//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, file names, endpoints)
//! - The library-side `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, Config, LogFormat, LogLevel, WebhookArgs};
