//! External command execution.
//!
//! Every installer step goes through [`CommandRunner`] so the sequencing can
//! be exercised without spawning real package managers.

use std::process::Command;

use log::{error, info};

use crate::error_handling::BootstrapError;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs to completion, capturing their output.
pub trait CommandRunner {
    /// Runs `program` with `args`.
    ///
    /// A program that ran and failed is `Ok` with `success == false`; `Err`
    /// means it could not be started.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, BootstrapError>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, BootstrapError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| BootstrapError::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs one installer step and logs its outcome.
///
/// Returns whether the command ran and exited successfully.
pub fn run_step(
    runner: &dyn CommandRunner,
    description: &str,
    program: &str,
    args: &[&str],
) -> bool {
    info!("{}: {} {}", description, program, args.join(" "));
    match runner.run(program, args) {
        Ok(output) if output.success => {
            info!("{}: OK", description);
            true
        }
        Ok(output) => {
            error!("{}: FAILED (exit code {:?})", description, output.code);
            error!("Error: {}", output.stderr.trim());
            false
        }
        Err(e) => {
            error!("{}: FAILED", description);
            error!("Error: {}", e);
            false
        }
    }
}
