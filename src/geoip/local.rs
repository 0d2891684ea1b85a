//! Offline lookups against a MaxMind country database.

use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use maxminddb::Reader;

use crate::error_handling::GeoIpError;

/// A MaxMind GeoLite2 country database held in memory.
///
/// Cheap to clone; clones share the same reader.
#[derive(Clone)]
pub struct LocalCountryDb {
    reader: Arc<Reader<Vec<u8>>>,
    source: String,
}

impl LocalCountryDb {
    /// Loads the database at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist: the local step is
    /// simply skipped in that case.
    pub async fn load(path: &Path) -> Result<Option<Self>, GeoIpError> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            log::debug!("GeoIP database {} not found", path.display());
            return Ok(None);
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| GeoIpError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_bytes(bytes, &path.to_string_lossy()).map(Some)
    }

    /// Blocking variant of [`LocalCountryDb::load`].
    pub fn load_blocking(path: &Path) -> Result<Option<Self>, GeoIpError> {
        if !path.exists() {
            log::debug!("GeoIP database {} not found", path.display());
            return Ok(None);
        }

        let bytes = std::fs::read(path).map_err(|source| GeoIpError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(bytes, &path.to_string_lossy()).map(Some)
    }

    /// Parses an in-memory database.
    pub fn from_bytes(bytes: Vec<u8>, source: &str) -> Result<Self, GeoIpError> {
        let reader = Reader::from_source(bytes)?;
        log::info!(
            "Loaded GeoIP database {} ({}, build_{})",
            source,
            reader.metadata.database_type,
            reader.metadata.build_epoch
        );
        Ok(Self {
            reader: Arc::new(reader),
            source: source.to_string(),
        })
    }

    /// Where the database was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Looks up the ISO country code of `ip`.
    ///
    /// `Ok(None)` when the address is not in the database or the record has
    /// no two-letter code.
    pub fn lookup(&self, ip: IpAddr) -> Result<Option<String>, GeoIpError> {
        // maxminddb 0.27: lookup() yields a LookupResult; has_data() before decode()
        let lookup = self.reader.lookup(ip)?;
        if !lookup.has_data() {
            return Ok(None);
        }

        let country = lookup.decode::<maxminddb::geoip2::Country>()?;
        Ok(country
            .and_then(|record| record.country.iso_code)
            .filter(|code| code.len() == 2)
            .map(|code| code.to_string()))
    }
}
