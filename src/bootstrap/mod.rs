//! Server bootstrap: folder layout, Rust toolchain, Python dependencies,
//! `.env` scaffolding and server start.
//!
//! Everything here is blocking. Async callers should run it on
//! `tokio::task::spawn_blocking`.

mod deps;
mod env_file;
mod runner;
mod rust;
mod setup;
#[cfg(test)]
mod test_support;

pub use deps::{
    install_deps, install_maturin, install_requirements, MATURIN_SPEC, PINNED_DEPENDENCIES,
    ROSU_PP_SPEC,
};
pub use env_file::{create_env_file, EnvFileStatus, ENV_EXAMPLE_FILE, ENV_FILE, ENV_TEMPLATE};
pub use runner::{run_step, CommandOutput, CommandRunner, SystemRunner};
pub use rust::{install_rust, rust_installed, RustupSource};
pub use setup::{
    is_affirmative, run_setup, setup_and_start, setup_database, should_start_server, start_server,
    SetupOptions, SetupStep, StartChoice,
};
