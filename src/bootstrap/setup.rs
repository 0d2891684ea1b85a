//! The full setup pipeline and server start.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{error, info};

use super::deps::install_requirements;
use super::env_file::create_env_file;
use super::runner::CommandRunner;
use super::rust::{install_rust, RustupSource};
use crate::config::{DEFAULT_PYTHON, DEFAULT_SERVER_ENTRYPOINT};
use crate::error_handling::BootstrapError;

/// Answers that accept the "start the server?" prompt
const AFFIRMATIVE_ANSWERS: &[&str] = &["s", "sim", "y", "yes"];

/// Whether to start the server once setup succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    Ask,
    Always,
    Never,
}

/// One step of [`run_setup`], in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    InstallRust,
    InstallDependencies,
    ConfigureDatabase,
    CreateEnvFile,
}

impl SetupStep {
    pub const ALL: [SetupStep; 4] = [
        SetupStep::InstallRust,
        SetupStep::InstallDependencies,
        SetupStep::ConfigureDatabase,
        SetupStep::CreateEnvFile,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            SetupStep::InstallRust => "Installing Rust",
            SetupStep::InstallDependencies => "Installing dependencies",
            SetupStep::ConfigureDatabase => "Configuring database",
            SetupStep::CreateEnvFile => "Creating .env",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub python: String,
    /// Directory holding `requirements.txt`, `.env` and the server entry point
    pub project_dir: PathBuf,
    pub rustup: RustupSource,
    pub start: StartChoice,
    pub entrypoint: PathBuf,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            project_dir: PathBuf::from("."),
            rustup: RustupSource::for_current_platform(),
            start: StartChoice::Ask,
            entrypoint: PathBuf::from(DEFAULT_SERVER_ENTRYPOINT),
        }
    }
}

/// The database is provisioned by the host; this step only points at the setting.
pub fn setup_database() -> bool {
    info!("Checking database...");
    info!("Configure DATABASE_URL in .env (or in your hosting panel)");
    true
}

/// Runs every [`SetupStep`] in order. On failure returns the step that failed;
/// later steps are not attempted.
pub fn run_setup(runner: &dyn CommandRunner, options: &SetupOptions) -> Result<(), SetupStep> {
    for step in SetupStep::ALL {
        info!("{}...", step.description());
        let ok = match step {
            SetupStep::InstallRust => install_rust(runner, &options.rustup),
            SetupStep::InstallDependencies => install_requirements(
                runner,
                &options.python,
                &options.project_dir.join("requirements.txt"),
            ),
            SetupStep::ConfigureDatabase => setup_database(),
            SetupStep::CreateEnvFile => match create_env_file(&options.project_dir) {
                Ok(_) => true,
                Err(e) => {
                    error!("Failed to create .env: {}", e);
                    false
                }
            },
        };

        if !ok {
            error!("Failed at: {}", step.description());
            error!("Check the logs above and try again");
            return Err(step);
        }
    }

    info!("Setup complete!");
    Ok(())
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// Resolves a [`StartChoice`], prompting on `output` and reading one line
/// from `input` when it is [`StartChoice::Ask`]. End of input means no.
pub fn should_start_server<R: BufRead, W: Write>(
    choice: StartChoice,
    input: &mut R,
    output: &mut W,
) -> bool {
    match choice {
        StartChoice::Always => true,
        StartChoice::Never => false,
        StartChoice::Ask => {
            let _ = write!(output, "Start the server now? (y/N): ");
            let _ = output.flush();
            let mut answer = String::new();
            match input.read_line(&mut answer) {
                Ok(_) => is_affirmative(&answer),
                Err(_) => false,
            }
        }
    }
}

/// Starts the game server with inherited stdio and waits for it to exit.
///
/// Returns whether the server exited successfully.
pub fn start_server(
    python: &str,
    entrypoint: &Path,
    project_dir: &Path,
) -> Result<bool, BootstrapError> {
    info!("Starting server...");
    info!("Press Ctrl+C to stop");

    let status = Command::new(python)
        .arg(entrypoint)
        .current_dir(project_dir)
        .status()
        .map_err(|source| BootstrapError::Spawn {
            program: python.to_string(),
            source,
        })?;

    if status.success() {
        info!("Server stopped");
    } else {
        error!("Server exited with {}", status);
    }
    Ok(status.success())
}

/// `setup` end to end: pipeline, start prompt, optional server start.
///
/// Returns whether everything that ran succeeded.
pub fn setup_and_start<R: BufRead, W: Write>(
    runner: &dyn CommandRunner,
    options: &SetupOptions,
    input: &mut R,
    output: &mut W,
) -> bool {
    if run_setup(runner, options).is_err() {
        return false;
    }

    if !should_start_server(options.start, input, output) {
        info!(
            "To start later: droid_utils serve --entrypoint {}",
            options.entrypoint.display()
        );
        return true;
    }

    match start_server(&options.python, &options.entrypoint, &options.project_dir) {
        Ok(ok) => ok,
        Err(e) => {
            error!("Error starting server: {}", e);
            false
        }
    }
}
