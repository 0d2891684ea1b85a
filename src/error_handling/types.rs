//! Error type definitions.
//!
//! One enum per concern. Public helpers catch these at their edge and turn
//! them into log lines plus a failure indicator.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file or its parent directory.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// The database URL does not use the `sqlite:` scheme.
    #[error("Unsupported database URL (expected sqlite:): {0}")]
    UnsupportedUrl(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Error types for IP geolocation.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The database file exists but could not be read.
    #[error("Failed to read GeoIP database {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The database file is not a valid MaxMind database, or a lookup failed.
    #[error("GeoIP database error: {0}")]
    Database(#[from] maxminddb::MaxMindDbError),

    /// The online lookup could not be performed.
    #[error("Online country lookup failed: {0}")]
    Http(#[from] ReqwestError),

    /// The online lookup answered with something other than a country code.
    #[error("Online country lookup returned status {0}")]
    UnexpectedStatus(u16),
}

/// Error types for webhook delivery.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The webhook URL is not a valid absolute URL.
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure.
    #[error("Webhook request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The endpoint rejected the message.
    #[error("Webhook endpoint returned status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Error types for the bootstrap routines.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// A program could not be spawned at all (missing binary, permissions).
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure while preparing installers or writing `.env`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Download of an installer failed.
    #[error("Download failed: {0}")]
    Download(#[from] ReqwestError),

    /// Download answered with a non-success status.
    #[error("Download of {url} returned status {status}")]
    DownloadStatus { url: String, status: u16 },
}
