// storage/mod.rs
// Database operations module

pub mod migrations;
pub mod pool;
#[cfg(test)]
pub mod test_helpers;
pub mod users;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use pool::init_db_pool;
pub use users::{distinct_countries, fetch_user_country, set_user_country, UserCountry};
