//! Database migration management.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Migrations from `migrations/`, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!();

/// Runs the embedded SQLx migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
