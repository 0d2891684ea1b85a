//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Environment (`.env`) loading

mod logger;

use std::path::PathBuf;

// Re-export public API
pub use logger::init_logger_with;

/// Loads environment variables from a `.env` file.
///
/// Tries the current directory first, then the directory of the running
/// executable. Returns the path that was loaded, if any. A missing file is
/// not an error: every setting has a CLI flag and a default.
pub fn load_env_file() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }

    let exe_path = std::env::current_exe().ok()?;
    let env_path = exe_path.parent()?.join(".env");
    if env_path.exists() && dotenvy::from_path(&env_path).is_ok() {
        return Some(env_path);
    }
    None
}
