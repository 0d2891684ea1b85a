//! On-disk layout of the server's data directory.

use std::io;
use std::path::Path;

use crate::config::{DATA_DIR, REQUIRED_FOLDERS};

/// Ensures `root/data` and its required sub-folders exist.
///
/// Idempotent: existing folders and their contents are left alone.
pub fn check_folders(root: &Path) -> io::Result<()> {
    let data_dir = root.join(DATA_DIR);
    if !data_dir.is_dir() {
        std::fs::create_dir(&data_dir)?;
        log::info!("Created {}", data_dir.display());
    }

    for folder in REQUIRED_FOLDERS {
        let path = data_dir.join(folder);
        if !path.is_dir() {
            std::fs::create_dir(&path)?;
            log::info!("Created {}", path.display());
        }
    }

    Ok(())
}
