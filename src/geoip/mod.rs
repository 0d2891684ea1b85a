//! IP → country resolution.
//!
//! Resolution is a two-step fallback: a local MaxMind GeoLite2 country
//! database first, then a single request to an online lookup service.
//! Loopback and private-looking addresses are never looked up. Nothing is
//! retried or cached; every failure ends as `None`.

mod local;
mod online;
mod resolver;
#[cfg(test)]
mod test_support;

// Re-export public API
pub use local::LocalCountryDb;
pub use online::{country_lookup_url, lookup_online, lookup_online_blocking};
pub use resolver::CountryResolver;

use crate::config::{IPV6_LOOPBACK, SKIPPED_ADDRESS_PREFIXES};

/// Returns true for addresses that are never geolocated.
///
/// Plain prefix match on the textual address: `127.`, `192.168.`, `10.`,
/// `172.`, plus the exact IPv6 loopback `::1`.
pub fn is_skipped_address(ip: &str) -> bool {
    ip == IPV6_LOOPBACK
        || SKIPPED_ADDRESS_PREFIXES
            .iter()
            .any(|prefix| ip.starts_with(prefix))
}
