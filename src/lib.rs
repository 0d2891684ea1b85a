//! droid_utils library: bootstrap tooling and helpers for an osu!droid score server
//!
//! This library provides the pieces the game server leans on outside of its
//! request handlers: name and password hashing helpers, Discord webhook
//! delivery, IP → country resolution with a local MaxMind database and an
//! online fallback, a best-effort country backfill for user accounts, and the
//! installer routines that prepare a fresh host.
//!
//! # Example
//!
//! ```no_run
//! use droid_utils::geoip::CountryResolver;
//! use droid_utils::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = CountryResolver::from_config(&Config::default()).await?;
//! match resolver.resolve("8.8.8.8").await {
//!     Some(country) => println!("8.8.8.8 is in {}", country),
//!     None => println!("8.8.8.8 could not be resolved"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The async APIs require a Tokio runtime. The [`bootstrap`] routines and the
//! `*_blocking` variants are synchronous and must not run on an async worker
//! thread; use `tokio::task::spawn_blocking` there.

pub mod bootstrap;
pub mod config;
pub mod country;
pub mod error_handling;
pub mod geoip;
pub mod hashing;
pub mod initialization;
pub mod layout;
pub mod storage;
pub mod utils;
pub mod webhook;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use country::{update_user_country_if_needed, BackfillOutcome};
pub use geoip::CountryResolver;
pub use hashing::{check_md5, make_md5, make_safe, make_uuid};
pub use storage::{init_db_pool, run_migrations};
pub use webhook::{send_webhook, Embed, WebhookMessage};
