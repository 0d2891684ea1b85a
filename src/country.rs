//! Country backfill: fill in a user's missing country from their IP address.

use log::{error, info};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::geoip::CountryResolver;
use crate::storage::{fetch_user_country, set_user_country};

/// What [`update_user_country_if_needed`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackfillOutcome {
    /// No user with that id.
    UserNotFound,
    /// The user already has a country; nothing was looked up.
    AlreadySet,
    /// The address could not be resolved to a country.
    Unresolved,
    /// The country was stored.
    Updated(String),
    /// A database error occurred (already logged).
    Failed,
}

/// Stores a country for `user_id` from `ip` if the user has none yet.
///
/// Best-effort: errors are logged and reported as [`BackfillOutcome::Failed`],
/// never returned.
pub async fn update_user_country_if_needed(
    pool: &SqlitePool,
    resolver: &CountryResolver,
    user_id: i64,
    ip: &str,
) -> BackfillOutcome {
    match backfill(pool, resolver, user_id, ip).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Failed to update country for user {}: {}", user_id, e);
            BackfillOutcome::Failed
        }
    }
}

async fn backfill(
    pool: &SqlitePool,
    resolver: &CountryResolver,
    user_id: i64,
    ip: &str,
) -> Result<BackfillOutcome, DatabaseError> {
    let Some(user) = fetch_user_country(pool, user_id).await? else {
        return Ok(BackfillOutcome::UserNotFound);
    };
    if user.is_set() {
        return Ok(BackfillOutcome::AlreadySet);
    }

    let Some(country) = resolver.resolve(ip).await else {
        return Ok(BackfillOutcome::Unresolved);
    };

    set_user_country(pool, user_id, &country).await?;
    info!(
        "Updated country for user {} to {} based on IP {}",
        user_id, country, ip
    );
    Ok(BackfillOutcome::Updated(country))
}
