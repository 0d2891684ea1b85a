//! Timing instrumentation for async operations.

use std::future::Future;
use std::time::Instant;

/// Awaits `future` and logs how long it took at debug level.
///
/// ```no_run
/// # async fn example(pool: &sqlx::SqlitePool) {
/// use droid_utils::utils::timed;
///
/// let countries = timed("distinct_countries", droid_utils::storage::distinct_countries(pool)).await;
/// # }
/// ```
pub async fn timed<F, T>(label: &str, future: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let result = future.await;
    log::debug!(
        "{} took {:.4} seconds",
        label,
        start.elapsed().as_secs_f64()
    );
    result
}
