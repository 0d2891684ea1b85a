//! Database connection pool management.
//!
//! This module initializes the SQLite connection pool with:
//! - Automatic database file (and parent directory) creation
//! - WAL mode enabled for concurrent access with the game server

use std::path::Path;
use std::str::FromStr;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Initializes and returns a database connection pool for `database_url`.
///
/// Accepts `sqlite:` URLs (`sqlite://data/droid.db`, `sqlite::memory:`).
pub async fn init_db_pool(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    if !database_url.starts_with("sqlite:") {
        error!("Unsupported database URL: {}", database_url);
        return Err(DatabaseError::UnsupportedUrl(database_url.to_string()));
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| {
            error!("Invalid database URL {}: {e}", database_url);
            DatabaseError::SqlError(e)
        })?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    if let Some(parent) = Path::new(options.get_filename()).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create database directory: {e}");
                DatabaseError::FileCreationError(e.to_string())
            })?;
            info!("Created database directory {}", parent.display());
        }
    }

    let pool = SqlitePool::connect_with(options).await.map_err(|e| {
        error!("Failed to connect to database: {e}");
        DatabaseError::SqlError(e)
    })?;

    Ok(pool)
}
