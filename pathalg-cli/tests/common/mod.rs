//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated home directory so no user configuration leaks in
//! - Command builders with PATHALG_* variables cleared
//! - Config file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads.
const PATHALG_VARS: [&str; 3] = ["PATHALG_PLATFORM", "PATHALG_FORCE", "PATHALG_LOG_MODE"];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as HOME
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

    /// Get a command builder with a clean environment and no platform flag.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathalg").expect("Failed to find pathalg binary");
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path);
        for var in PATHALG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder using the Unix grammar.
    pub fn unix(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg("unix");
        cmd
    }

    /// Get a command builder using the Windows grammar.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg("windows");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a configuration file under the temp directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Write the user configuration file (`~/.pathalg/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.temp_path.join(".pathalg");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }
}

/// Run a command and return its trimmed stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run pathalg");
    assert!(
        output.status.success(),
        "pathalg failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .trim_end()
        .to_string()
}
