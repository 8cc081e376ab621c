//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated home and environment
//! - A small fixture tree to point commands at

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const ISOLATED_VARS: &[&str] = &[
    "PATHKIT_CONFIG",
    "PATHKIT_FORMAT",
    "PATHKIT_LOG_MODE",
    "PATHKIT_OUTPUT",
    "PATHKIT_INCLUDE_HIDDEN",
    "PATHKIT_FOLLOW_LINKS",
    "PATHKIT_MAX_DEPTH",
    "PATHKIT_GLOB_CASE_SENSITIVE",
];

/// Test environment with an isolated home directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary working directory for test files
/// - A separate home directory, so no user configuration is picked up
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the working directory
    pub work_dir: PathBuf,
    /// Canonical path to the home directory
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates `work/` and `home/` under a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let work_dir = root.join("work");
        let home_dir = root.join("home");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// Get a command builder running `pathkit` inside the working directory
    /// with `HOME` pointed at the isolated home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathkit").expect("Failed to find pathkit binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// Create a directory (and parents) under the working directory.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file under the working directory.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Build the standard tree:
    /// `directory/{child, subdirectory/child, .hidden/inner}`, `file`,
    /// `permissions/{deletable, executable, readable, writable}`.
    pub fn create_fixture(&self) {
        self.create_file("directory/child", "");
        self.create_file("directory/subdirectory/child", "");
        self.create_file("directory/.hidden/inner", "");
        self.create_file("file", "contents\n");
        for name in ["deletable", "executable", "readable", "writable"] {
            self.create_file(&format!("permissions/{name}"), "");
        }
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathkit");
        assert!(
            output.status.success(),
            "pathkit {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Like [`TestEnv::stdout`], split into lines.
    pub fn lines(&self, args: &[&str]) -> Vec<String> {
        self.stdout(args).lines().map(str::to_string).collect()
    }

    /// Absolute form of a path under the working directory, as a string.
    pub fn abs(&self, relative: &str) -> String {
        self.work_dir.join(relative).to_string_lossy().into_owned()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
