//! Error handling.
//!
//! Typed errors for each concern of the crate:
//! - initialization (logger, HTTP clients)
//! - database access
//! - IP geolocation
//! - webhook delivery
//! - bootstrap (process spawning, downloads, file writes)

mod types;

// Re-export public API
pub use types::{BootstrapError, DatabaseError, GeoIpError, InitializationError, WebhookError};
