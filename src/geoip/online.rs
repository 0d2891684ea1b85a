//! Online country lookup (ipapi-style `/{ip}/country/` endpoint).

use std::net::IpAddr;
use std::time::Duration;

use reqwest::StatusCode;

use crate::error_handling::GeoIpError;

/// Builds the lookup URL for `ip` under `base`.
pub fn country_lookup_url(base: &str, ip: IpAddr) -> String {
    format!("{}/{}/country/", base.trim_end_matches('/'), ip)
}

/// Extracts a country code from a response body.
///
/// Only a bare two-letter code is accepted. The service answers `Undefined`
/// (or an error document) for addresses it cannot place.
fn parse_country_body(body: &str) -> Option<String> {
    let code = body.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_string())
    } else {
        None
    }
}

/// Performs one online lookup with the async client.
pub async fn lookup_online(
    client: &reqwest::Client,
    base: &str,
    ip: IpAddr,
    timeout: Duration,
) -> Result<Option<String>, GeoIpError> {
    let response = client
        .get(country_lookup_url(base, ip))
        .timeout(timeout)
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(GeoIpError::UnexpectedStatus(response.status().as_u16()));
    }

    let body = response.text().await?;
    Ok(parse_country_body(&body))
}

/// Performs one online lookup with a blocking client.
///
/// Must not be called from inside an async runtime.
pub fn lookup_online_blocking(
    base: &str,
    ip: IpAddr,
    timeout: Duration,
) -> Result<Option<String>, GeoIpError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(country_lookup_url(base, ip)).send()?;

    if response.status() != StatusCode::OK {
        return Err(GeoIpError::UnexpectedStatus(response.status().as_u16()));
    }

    let body = response.text()?;
    Ok(parse_country_body(&body))
}
