//! Shared testing utilities for api-mock-runner CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary with a no-op mock server.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("api-mock-runner").expect("Failed to locate api-mock-runner binary");
        cmd.current_dir(self.work_dir())
            .env("API_MOCK_RUNNER_MOCK_COMMAND", "true")
            .env_remove("API_MOCK_RUNNER_RC_FILE")
            .env_remove("API_MOCK_RUNNER_SCRATCH_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the working directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a minimal OpenAPI document.
    pub fn write_schema(&self, relative: &str) -> PathBuf {
        self.write(relative, "openapi: 3.0.0\ninfo:\n  title: Test\n  version: 1.0.0\npaths: {}\n")
    }

    /// Pre-populate `.gitignore` so no confirmation prompt is needed.
    pub fn ignore_rc_file(&self) {
        self.write(".gitignore", ".apimockrc\n");
    }

    pub fn rc_file(&self) -> PathBuf {
        self.work_dir.join(".apimockrc")
    }

    /// Parsed run-control file.
    pub fn read_rc_file(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.rc_file()).expect("Failed to read .apimockrc");
        serde_json::from_str(&content).expect(".apimockrc should be valid JSON")
    }
}
