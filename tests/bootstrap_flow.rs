//! End-to-end tests of the bootstrap routines with a scripted command runner.
//!
//! No real package manager, installer or server is spawned.

use std::cell::RefCell;
use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

use droid_utils::bootstrap::{
    install_deps, run_setup, setup_and_start, CommandOutput, CommandRunner, RustupSource,
    SetupOptions, SetupStep, StartChoice, ENV_TEMPLATE, PINNED_DEPENDENCIES,
};
use droid_utils::error_handling::BootstrapError;
use droid_utils::layout::check_folders;

/// Succeeds for every command except those containing `fail_on`.
struct ScriptedRunner {
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    fn new(fail_on: Option<&'static str>) -> Self {
        Self {
            fail_on,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, BootstrapError> {
        let line = format!("{} {}", program, args.join(" "));
        let failed = self.fail_on.is_some_and(|needle| line.contains(needle));
        self.calls.borrow_mut().push(line);
        Ok(CommandOutput {
            success: !failed,
            code: Some(if failed { 1 } else { 0 }),
            stderr: if failed { "boom".to_string() } else { String::new() },
            ..Default::default()
        })
    }
}

fn options_in(dir: &TempDir) -> SetupOptions {
    SetupOptions {
        python: "python3".to_string(),
        project_dir: dir.path().to_path_buf(),
        rustup: RustupSource {
            url: "http://127.0.0.1:9/rustup.sh".to_string(),
            file_name: "rustup.sh".to_string(),
        },
        start: StartChoice::Never,
        entrypoint: PathBuf::from("main.py"),
    }
}

#[test]
fn test_fresh_host_setup() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    check_folders(temp_dir.path()).expect("check_folders");
    let runner = ScriptedRunner::new(None);

    assert_eq!(run_setup(&runner, &options_in(&temp_dir)), Ok(()));

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], "rustc --version");
    assert_eq!(calls[1], "python3 -m pip install maturin>=1.0.0");
    assert!(calls[2].starts_with("python3 -m pip install -r "));
    assert!(calls[2].ends_with("requirements.txt"));

    let env = std::fs::read_to_string(temp_dir.path().join(".env")).expect("read .env");
    assert_eq!(env, ENV_TEMPLATE);
    assert!(temp_dir.path().join("data/replays").is_dir());
    assert!(temp_dir.path().join("data/beatmaps").is_dir());
}

#[test]
fn test_rerun_keeps_configured_env() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join(".env"), "OSU_KEY=real-key\n").expect("write .env");
    let runner = ScriptedRunner::new(None);

    assert_eq!(run_setup(&runner, &options_in(&temp_dir)), Ok(()));
    let env = std::fs::read_to_string(temp_dir.path().join(".env")).expect("read .env");
    assert_eq!(env, "OSU_KEY=real-key\n");
}

#[test]
fn test_setup_aborts_on_maturin_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let runner = ScriptedRunner::new(Some("maturin"));

    assert_eq!(
        run_setup(&runner, &options_in(&temp_dir)),
        Err(SetupStep::InstallDependencies)
    );
    // requirements.txt is never attempted after maturin fails
    assert_eq!(runner.calls().len(), 2);
    assert!(!temp_dir.path().join(".env").exists());
}

#[test]
fn test_setup_and_start_reports_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let runner = ScriptedRunner::new(Some("-r"));
    let mut options = options_in(&temp_dir);
    options.start = StartChoice::Ask;

    let mut input = Cursor::new("yes\n");
    let mut output = Vec::new();
    assert!(!setup_and_start(&runner, &options, &mut input, &mut output));
    assert!(output.is_empty(), "no prompt after a failed setup");
}

#[test]
fn test_install_deps_full_sequence() {
    let runner = ScriptedRunner::new(None);
    assert!(install_deps(&runner, "python3"));

    let calls = runner.calls();
    assert_eq!(calls.len(), 2 + PINNED_DEPENDENCIES.len().div_ceil(5));
    assert!(calls[0].ends_with("maturin>=1.0.0"));
    let rosu_pp = "git+https://github.com/unclem2/rosu-pp-py";
    assert!(calls[1].ends_with(rosu_pp));
    let pip = "python3 -m pip install ";
    assert!(calls.iter().all(|c| c.starts_with(pip)));
}

#[test]
fn test_install_deps_stops_after_failed_rosu_build() {
    let runner = ScriptedRunner::new(Some("rosu-pp-py"));
    assert!(!install_deps(&runner, "python3"));
    assert_eq!(runner.calls().len(), 2);
}
