//! Shared test helpers for storage and backfill tests.

#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::storage::run_migrations;

/// Creates an in-memory database with migrations applied.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Inserts a user and returns its id.
#[cfg(test)]
pub async fn create_test_user(pool: &SqlitePool, username: &str, country: Option<&str>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, country) VALUES (?, ?) RETURNING id",
    )
    .bind(username)
    .bind(country)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test user")
}
