//! Common utilities for integration tests
//!
//! Every test runs the `encik` binary inside its own temporary directory so
//! the default `data/encik.txt` never touches the real working tree.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the `encik` binary built for this test run
pub fn encik_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_encik"))
}

/// Create a Command for `encik` running inside `dir`
///
/// Configuration variables are cleared so defaults apply relative to `dir`.
pub fn encik_command(dir: &Path) -> Command {
    let mut cmd = Command::new(encik_binary());
    cmd.current_dir(dir)
        .env_remove("ENCIK_DATA_FILE")
        .env_remove("ENCIK_MAX_TASKS")
        .env_remove("ENCIK_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Run one session in `dir` with the given stdin and return its stdout
#[allow(dead_code)] // Not all test files use this
pub fn run_session(dir: &Path, input: &str) -> String {
    let output = encik_command(dir).write_stdin(input).output().unwrap();
    assert!(
        output.status.success(),
        "encik exited with {:?}",
        output.status
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Default task file inside a test directory
#[allow(dead_code)]
pub fn data_file(dir: &Path) -> PathBuf {
    dir.join("data").join("encik.txt")
}

pub fn setup_test_env() -> TempDir {
    TempDir::new().unwrap()
}
