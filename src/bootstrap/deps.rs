//! Python dependency installation.
//!
//! `rosu-pp-py` is built from source with maturin, so maturin goes first and
//! the rest follows in small batches.

use std::path::Path;

use log::info;

use super::runner::{run_step, CommandRunner};
use crate::config::INSTALL_BATCH_SIZE;

/// Build tool required by the PP calculator
pub const MATURIN_SPEC: &str = "maturin>=1.0.0";

/// PP calculator bindings, installed from source
pub const ROSU_PP_SPEC: &str = "git+https://github.com/unclem2/rosu-pp-py";

/// Remaining server dependencies with their pinned versions
pub const PINNED_DEPENDENCIES: &[&str] = &[
    "aiohttp~=3.10.5",
    "asyncpg",
    "coloredlogs==15.0.1",
    "Hypercorn==0.17.3",
    "python-dotenv==1.0.1",
    "python-socketio~=5.11.4",
    "Quart~=0.19.6",
    "Werkzeug~=3.0.4",
    "discord-webhook[async]==1.3.1",
    "geoip2==4.8.1",
    "pytest~=8.3.4",
    "requests~=2.32.3",
    "javaobj-py3~=0.4.4",
];

fn pip_install(
    runner: &dyn CommandRunner,
    python: &str,
    description: &str,
    packages: &[&str],
) -> bool {
    let mut args = vec!["-m", "pip", "install"];
    args.extend_from_slice(packages);
    run_step(runner, description, python, &args)
}

/// Installs maturin.
pub fn install_maturin(runner: &dyn CommandRunner, python: &str) -> bool {
    pip_install(
        runner,
        python,
        "Installing maturin (build tool)",
        &[MATURIN_SPEC],
    )
}

/// Installs every server dependency in order, stopping at the first failure.
///
/// 1. maturin
/// 2. rosu-pp-py
/// 3. [`PINNED_DEPENDENCIES`] in batches of [`INSTALL_BATCH_SIZE`]
pub fn install_deps(runner: &dyn CommandRunner, python: &str) -> bool {
    info!("Installing osu!droid server dependencies");

    if !install_maturin(runner, python) {
        return false;
    }

    if !pip_install(
        runner,
        python,
        "Installing rosu-pp-py (PP calculator)",
        &[ROSU_PP_SPEC],
    ) {
        return false;
    }

    for (index, batch) in PINNED_DEPENDENCIES.chunks(INSTALL_BATCH_SIZE).enumerate() {
        let description = format!("Installing dependency batch {}", index + 1);
        if !pip_install(runner, python, &description, batch) {
            return false;
        }
    }

    info!("All dependencies installed successfully");
    true
}

/// Installs maturin, then everything listed in `requirements`.
pub fn install_requirements(runner: &dyn CommandRunner, python: &str, requirements: &Path) -> bool {
    info!("Installing Python dependencies");

    if !install_maturin(runner, python) {
        log::error!("Failed to install maturin");
        return false;
    }

    let requirements = requirements.to_string_lossy();
    run_step(
        runner,
        "Installing requirements",
        python,
        &["-m", "pip", "install", "-r", &requirements],
    )
}
