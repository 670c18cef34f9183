//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".catchlog");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn catches_file(&self) -> PathBuf {
        self.data_dir.join("catches.json")
    }

    /// A `catchlog` command pointed at this fixture's data dir.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("catchlog").expect("binary exists");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Log a catch and assert it succeeded.
    pub fn add_catch(&self, fish_type: &str, size: &str, lure: &str, location: &str) {
        self.command()
            .args(["add", "--fish-type", fish_type, "--size", size])
            .args(["--lure", lure, "--location", location])
            .assert()
            .success();
    }

    /// Run `list --format json` and parse the records.
    pub fn list_json(&self, extra_args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .args(extra_args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).expect("valid json output")
    }
}
