//! Rust toolchain installation through rustup.

use std::path::Path;
use std::time::Duration;

use log::{error, info, warn};

use super::runner::{run_step, CommandRunner};
use crate::error_handling::BootstrapError;

/// Timeout for downloading the rustup installer
const RUSTUP_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Where to fetch the rustup installer from, and what to call it on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustupSource {
    pub url: String,
    pub file_name: String,
}

impl RustupSource {
    /// The official installer for the platform this binary was built for.
    pub fn for_current_platform() -> Self {
        if cfg!(windows) {
            Self {
                url: "https://win.rustup.rs/x86_64".to_string(),
                file_name: "rustup-init.exe".to_string(),
            }
        } else {
            Self {
                url: "https://sh.rustup.rs".to_string(),
                file_name: "rustup.sh".to_string(),
            }
        }
    }
}

/// True when `rustc --version` runs successfully.
pub fn rust_installed(runner: &dyn CommandRunner) -> bool {
    runner
        .run("rustc", &["--version"])
        .is_ok_and(|output| output.success)
}

/// Installs the stable toolchain unless `rustc` is already available.
pub fn install_rust(runner: &dyn CommandRunner, source: &RustupSource) -> bool {
    info!("Checking Rust...");
    if rust_installed(runner) {
        info!("Rust is already installed");
        return true;
    }

    info!("Installing Rust...");
    match run_rustup(runner, source) {
        Ok(true) => {
            info!("Rust installed successfully");
            true
        }
        Ok(false) => false,
        Err(e) => {
            error!("Failed to install Rust: {}", e);
            false
        }
    }
}

/// Downloads the installer into a scratch directory, runs it, and removes it
/// whether or not it succeeded.
fn run_rustup(runner: &dyn CommandRunner, source: &RustupSource) -> Result<bool, BootstrapError> {
    let scratch = tempfile::tempdir()?;
    let installer = scratch.path().join(&source.file_name);

    info!("Downloading rustup from {}", source.url);
    download(&source.url, &installer)?;
    make_executable(&installer)?;

    let program = installer.to_string_lossy().into_owned();
    let installed = run_step(
        runner,
        "Running rustup",
        &program,
        &["-y", "--default-toolchain", "stable"],
    );

    if let Err(e) = std::fs::remove_file(&installer) {
        warn!("Failed to remove {}: {}", installer.display(), e);
    }
    Ok(installed)
}

fn download(url: &str, destination: &Path) -> Result<(), BootstrapError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(RUSTUP_DOWNLOAD_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(BootstrapError::DownloadStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response.bytes()?;
    std::fs::write(destination, &bytes)?;
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), BootstrapError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), BootstrapError> {
    Ok(())
}
