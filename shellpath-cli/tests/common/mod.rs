//! Common test utilities for CLI integration tests.
//!
//! - Test environment with a temporary directory for config files
//! - Command builders with the shellpath environment variables cleared
//! - Output helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const SHELLPATH_VARS: &[&str] = &[
    "SHELLPATH_POLICY",
    "SHELLPATH_HOME",
    "SHELLPATH_CONFIG",
    "SHELLPATH_LOG_MODE",
];

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A command with the shellpath variables cleared and nothing else set.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("shellpath").expect("Failed to find shellpath binary");
        for var in SHELLPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command using POSIX rules with `/home/me/src` as working directory.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.args(["--policy", "posix", "--cwd", "/home/me/src"]);
        cmd
    }

    /// A command using Windows rules with `C:\Users\me\src` as working directory.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.args(["--policy", "windows", "--cwd", r"C:\Users\me\src"]);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a command expecting success and return its stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run shellpath");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}
