//! Recording command runner for bootstrap tests.

use std::cell::RefCell;

use super::runner::{CommandOutput, CommandRunner};
use crate::error_handling::BootstrapError;

type FailPredicate = Box<dyn Fn(&str, &[&str]) -> bool>;

/// Records every call; fails the ones matching a predicate, and refuses to
/// spawn the programs listed as missing.
pub struct FakeRunner {
    calls: RefCell<Vec<Vec<String>>>,
    fail_when: FailPredicate,
    missing: Vec<String>,
}

impl FakeRunner {
    pub fn succeeding() -> Self {
        Self::failing_when(|_, _| false)
    }

    pub fn failing_when(predicate: impl Fn(&str, &[&str]) -> bool + 'static) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_when: Box::new(predicate),
            missing: Vec::new(),
        }
    }

    pub fn missing(programs: &[&str]) -> Self {
        Self {
            missing: programs.iter().map(|p| p.to_string()).collect(),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, BootstrapError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        if self.missing.iter().any(|m| m == program) {
            return Err(BootstrapError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        let failed = (self.fail_when)(program, args);
        Ok(CommandOutput {
            success: !failed,
            code: Some(if failed { 1 } else { 0 }),
            stdout: String::new(),
            stderr: if failed {
                "simulated failure".to_string()
            } else {
                String::new()
            },
        })
    }
}
