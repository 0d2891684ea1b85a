//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_GEOIP_DB_PATH, DEFAULT_IP_API_BASE, DEFAULT_PYTHON,
    DEFAULT_SERVER_ENTRYPOINT, IP_LOOKUP_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Can be constructed programmatically; the binary builds it from [`Cli`].
///
/// # Examples
///
/// ```no_run
/// use droid_utils::Config;
///
/// let config = Config {
///     database_url: "sqlite://droid.db".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// SQLite database URL holding the `users` table
    pub database_url: String,

    /// MaxMind country database (.mmdb); lookups skip it when the file is absent
    pub geoip_db_path: PathBuf,

    /// Base URL of the online country lookup
    pub ip_api_base: String,

    /// Timeout of the online country lookup
    pub ip_lookup_timeout: Duration,

    /// Python interpreter used by the bootstrap routines
    pub python: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            geoip_db_path: PathBuf::from(DEFAULT_GEOIP_DB_PATH),
            ip_api_base: DEFAULT_IP_API_BASE.to_string(),
            ip_lookup_timeout: IP_LOOKUP_TIMEOUT,
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

/// Command-line interface of the `droid_utils` binary.
#[derive(Debug, Parser)]
#[command(
    name = "droid_utils",
    version,
    about = "Bootstrap and maintenance helpers for the osu!droid score server"
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// SQLite database URL
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL,
        global = true
    )]
    pub database_url: String,

    /// MaxMind country database path
    #[arg(
        long,
        env = "GEOIP_DB_PATH",
        default_value = DEFAULT_GEOIP_DB_PATH,
        global = true
    )]
    pub geoip_db: PathBuf,

    /// Base URL of the online country lookup
    #[arg(
        long,
        env = "IP_API_BASE",
        default_value = DEFAULT_IP_API_BASE,
        global = true
    )]
    pub ip_api_base: String,

    /// Python interpreter used for dependency installation and the server
    #[arg(long, env = "PYTHON", default_value = DEFAULT_PYTHON, global = true)]
    pub python: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Builds the library configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            database_url: self.database_url.clone(),
            geoip_db_path: self.geoip_db.clone(),
            ip_api_base: self.ip_api_base.clone(),
            ip_lookup_timeout: IP_LOOKUP_TIMEOUT,
            python: self.python.clone(),
        }
    }
}

/// Subcommands of the `droid_utils` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install the server's Python dependencies in order
    InstallDeps,

    /// Full setup: Rust toolchain, dependencies, database notice, .env
    Setup {
        /// Start the server after setup without asking
        #[arg(long, conflicts_with = "no_start")]
        start: bool,

        /// Never start the server after setup
        #[arg(long)]
        no_start: bool,

        /// Server entry point
        #[arg(long, default_value = DEFAULT_SERVER_ENTRYPOINT)]
        entrypoint: PathBuf,
    },

    /// Start the game server directly
    Serve {
        /// Server entry point
        #[arg(long, default_value = DEFAULT_SERVER_ENTRYPOINT)]
        entrypoint: PathBuf,
    },

    /// Create the data/replays and data/beatmaps folders
    CheckFolders {
        /// Directory that holds (or will hold) `data/`
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Print the MD5 of a value, or verify it against an expected digest
    Hash {
        value: String,

        /// Expected hex digest
        #[arg(long)]
        check: Option<String>,
    },

    /// Generate an identifier: optional prefix followed by a hyphen-less UUID
    Uuid {
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Resolve the country of an IP address
    Lookup {
        ip: String,

        /// Use the blocking HTTP client for the online fallback
        #[arg(long)]
        blocking: bool,
    },

    /// Store a user's country from an IP address if none is set
    BackfillCountry {
        #[arg(long)]
        user_id: i64,

        #[arg(long)]
        ip: String,
    },

    /// List the distinct countries stored for users
    Countries,

    /// Send a message to a Discord webhook
    Webhook(WebhookArgs),
}

/// Arguments of the `webhook` subcommand.
#[derive(Debug, Args)]
pub struct WebhookArgs {
    /// Webhook URL
    #[arg(long, env = "DISCORD_WEBHOOK_URL")]
    pub url: String,

    /// Message content (embed description when `--embed` is set)
    pub content: String,

    /// Send the content as a rich embed
    #[arg(long)]
    pub embed: bool,

    #[arg(long, requires = "embed")]
    pub title: Option<String>,

    #[arg(long, requires = "embed")]
    pub title_url: Option<String>,

    #[arg(long, requires = "embed")]
    pub thumbnail: Option<String>,

    #[arg(long, requires = "embed")]
    pub footer: Option<String>,
}
