// Shared test helpers for database setup and mocked country lookups.

use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use sqlx::SqlitePool;

use droid_utils::{run_migrations, CountryResolver};

/// Creates an in-memory database pool with migrations applied.
#[allow(dead_code)] // Used by other test files
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
#[allow(dead_code)]
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

/// Reads a user's stored country.
#[allow(dead_code)]
pub async fn stored_country(pool: &SqlitePool, user_id: i64) -> Option<String> {
    sqlx::query_scalar("SELECT country FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read country")
}

/// Expects `times` lookups of `ip` on `server`, each answered with `body`.
#[allow(dead_code)]
pub fn expect_country_lookup(server: &Server, ip: &str, body: &'static str, times: usize) {
    let path = format!("/{}/country/", ip);
    server.expect(
        Expectation::matching(request::method_path("GET", eq(path)))
            .times(times)
            .respond_with(status_code(200).body(body)),
    );
}

/// Resolver without a local database, pointed at `server`.
#[allow(dead_code)]
pub fn online_resolver(server: &Server) -> CountryResolver {
    CountryResolver::new(
        None,
        format!("http://{}", server.addr()),
        Duration::from_secs(5),
    )
    .expect("Failed to create resolver")
}
