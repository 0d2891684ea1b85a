//! Logger initialization.
//!
//! This module provides the `env_logger` setup shared by every subcommand.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// `level` is the global default and the level of this crate; `sqlx`,
/// `reqwest` and `hyper` are clamped to less verbose levels. Directives in
/// `RUST_LOG` are applied last, so a module named there keeps the level it
/// is given. Supports plain text (with colors) and JSON.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Crate and global default from the CLI
/// droid_utils --log-level debug lookup 8.8.8.8
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=droid_utils=debug,reqwest=info droid_utils countries
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = logger_builder(level, format, rust_log.as_deref());

    // try_init() so repeated initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn logger_builder(
    level: LevelFilter,
    format: LogFormat,
    rust_log: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(level);
    builder.filter_module("sqlx", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("droid_utils", level);
    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
