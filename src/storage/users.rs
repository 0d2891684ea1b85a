//! Queries on the `users` table.
//!
//! Only the `country` column is read or written here.

use sqlx::{FromRow, SqlitePool};

use crate::error_handling::DatabaseError;

/// The stored country of a user row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserCountry {
    pub country: Option<String>,
}

impl UserCountry {
    /// True when a non-empty country is stored.
    pub fn is_set(&self) -> bool {
        self.country.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Fetches the country of user `user_id`; `None` when the user does not exist.
pub async fn fetch_user_country(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<UserCountry>, DatabaseError> {
    let row = sqlx::query_as::<_, UserCountry>("SELECT country FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Stores `country` for user `user_id`. Returns the number of rows updated.
pub async fn set_user_country(
    pool: &SqlitePool,
    user_id: i64,
    country: &str,
) -> Result<u64, DatabaseError> {
    let result = sqlx::query("UPDATE users SET country = ? WHERE id = ?")
        .bind(country)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Lists the distinct countries stored for users, sorted.
pub async fn distinct_countries(pool: &SqlitePool) -> Result<Vec<String>, DatabaseError> {
    let countries = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT country FROM users WHERE country IS NOT NULL ORDER BY country",
    )
    .fetch_all(pool)
    .await?;
    Ok(countries)
}
