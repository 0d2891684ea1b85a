//! The local-then-online country resolution chain.

use std::net::IpAddr;
use std::time::Duration;

use log::debug;

use super::is_skipped_address;
use super::local::LocalCountryDb;
use super::online::{lookup_online, lookup_online_blocking};
use crate::config::Config;
use crate::error_handling::InitializationError;

/// Resolves IP addresses to two-letter ISO country codes.
///
/// Holds the optional local database (loaded once) and the HTTP client used
/// for the online fallback.
pub struct CountryResolver {
    local: Option<LocalCountryDb>,
    api_base: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl CountryResolver {
    /// Creates a resolver from its parts.
    pub fn new(
        local: Option<LocalCountryDb>,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InitializationError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            local,
            api_base: api_base.into(),
            timeout,
            client,
        })
    }

    /// Creates a resolver from the configuration, loading the local database
    /// if present.
    ///
    /// A database that exists but cannot be loaded is logged and left out;
    /// lookups then go straight to the online service.
    pub async fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let local = match LocalCountryDb::load(&config.geoip_db_path).await {
            Ok(local) => local,
            Err(e) => {
                log::warn!(
                    "GeoIP database unavailable, using online lookups only: {}",
                    e
                );
                None
            }
        };
        Self::new(local, config.ip_api_base.clone(), config.ip_lookup_timeout)
    }

    /// Blocking variant of [`CountryResolver::from_config`].
    pub fn from_config_blocking(config: &Config) -> Result<Self, InitializationError> {
        let local = match LocalCountryDb::load_blocking(&config.geoip_db_path) {
            Ok(local) => local,
            Err(e) => {
                log::warn!(
                    "GeoIP database unavailable, using online lookups only: {}",
                    e
                );
                None
            }
        };
        Self::new(local, config.ip_api_base.clone(), config.ip_lookup_timeout)
    }

    pub fn has_local_db(&self) -> bool {
        self.local.is_some()
    }

    /// Resolves `ip` to a country code, or `None`.
    pub async fn resolve(&self, ip: &str) -> Option<String> {
        let addr = Self::lookup_target(ip)?;
        if let Some(code) = self.lookup_local(addr) {
            return Some(code);
        }

        match lookup_online(&self.client, &self.api_base, addr, self.timeout).await {
            Ok(code) => code,
            Err(e) => {
                debug!("Online API lookup failed for IP {}: {}", ip, e);
                None
            }
        }
    }

    /// Blocking variant of [`CountryResolver::resolve`].
    ///
    /// Must not be called from inside an async runtime.
    pub fn resolve_blocking(&self, ip: &str) -> Option<String> {
        let addr = Self::lookup_target(ip)?;
        if let Some(code) = self.lookup_local(addr) {
            return Some(code);
        }

        match lookup_online_blocking(&self.api_base, addr, self.timeout) {
            Ok(code) => code,
            Err(e) => {
                debug!("Online API lookup failed for IP {}: {}", ip, e);
                None
            }
        }
    }

    /// Filters out skipped and unparseable addresses.
    fn lookup_target(ip: &str) -> Option<IpAddr> {
        if is_skipped_address(ip) {
            return None;
        }
        match ip.parse::<IpAddr>() {
            Ok(addr) => Some(addr),
            Err(e) => {
                debug!("Not an IP address {:?}: {}", ip, e);
                None
            }
        }
    }

    fn lookup_local(&self, addr: IpAddr) -> Option<String> {
        let local = self.local.as_ref()?;
        match local.lookup(addr) {
            Ok(code) => code,
            Err(e) => {
                debug!("GeoLite2 lookup failed for IP {}: {}", addr, e);
                None
            }
        }
    }
}
