//! Configuration constants.
//!
//! Defaults for file locations, lookup endpoints and the bootstrap routines.

use std::time::Duration;

/// Default database URL (SQLite file next to the server data)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/droid.db";

/// Default location of the MaxMind country database
pub const DEFAULT_GEOIP_DB_PATH: &str = "GeoLite2-Country.mmdb";

/// Base URL of the online IP → country fallback
pub const DEFAULT_IP_API_BASE: &str = "https://ipapi.co";

/// Timeout for a single online country lookup
pub const IP_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for a single webhook delivery
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Address prefixes that are never geolocated (loopback and private ranges).
///
/// Matched as plain string prefixes, so every `172.*` address is skipped,
/// not only `172.16.0.0/12`.
pub const SKIPPED_ADDRESS_PREFIXES: &[&str] = &["127.", "192.168.", "10.", "172."];

/// IPv6 loopback, skipped by exact match
pub const IPV6_LOOPBACK: &str = "::1";

/// Root of the server's on-disk data
pub const DATA_DIR: &str = "data";

/// Folders that must exist under [`DATA_DIR`]
pub const REQUIRED_FOLDERS: &[&str] = &["replays", "beatmaps"];

/// Python interpreter used by the bootstrap routines
pub const DEFAULT_PYTHON: &str = "python3";

/// Entry point of the game server started after setup
pub const DEFAULT_SERVER_ENTRYPOINT: &str = "main.py";

/// Number of packages installed per `pip install` invocation
pub const INSTALL_BATCH_SIZE: usize = 5;
