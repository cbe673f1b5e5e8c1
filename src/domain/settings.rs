//! Process-wide settings, passed explicitly so tests can substitute them.

use std::env;
use std::path::{Path, PathBuf};

pub const RC_FILE_NAME: &str = ".apimockrc";
pub const SCRATCH_DIR_NAME: &str = ".api-mock-runner";
pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_MOCK_COMMAND: &str = "open-api-mocker";

pub const RC_FILE_ENV: &str = "API_MOCK_RUNNER_RC_FILE";
pub const SCRATCH_DIR_ENV: &str = "API_MOCK_RUNNER_SCRATCH_DIR";
pub const MOCK_COMMAND_ENV: &str = "API_MOCK_RUNNER_MOCK_COMMAND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    pub working_dir: PathBuf,
    pub rc_file_name: String,
    pub scratch_dir_name: String,
    pub default_port: u16,
    pub mock_command: String,
}

impl RunnerSettings {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            rc_file_name: RC_FILE_NAME.to_string(),
            scratch_dir_name: SCRATCH_DIR_NAME.to_string(),
            default_port: DEFAULT_PORT,
            mock_command: DEFAULT_MOCK_COMMAND.to_string(),
        }
    }

    /// Defaults overridden by any non-empty `API_MOCK_RUNNER_*` variables.
    pub fn from_env(working_dir: impl Into<PathBuf>) -> Self {
        let mut settings = Self::new(working_dir);
        if let Some(value) = non_empty_var(RC_FILE_ENV) {
            settings.rc_file_name = value;
        }
        if let Some(value) = non_empty_var(SCRATCH_DIR_ENV) {
            settings.scratch_dir_name = value;
        }
        if let Some(value) = non_empty_var(MOCK_COMMAND_ENV) {
            settings.mock_command = value;
        }
        settings
    }

    pub fn rc_file_path(&self) -> PathBuf {
        self.working_dir.join(&self.rc_file_name)
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.working_dir.join(&self.scratch_dir_name)
    }

    pub fn gitignore_path(&self) -> PathBuf {
        self.working_dir.join(".gitignore")
    }

    /// `.gitignore` line covering the scratch directory.
    pub fn scratch_gitignore_entry(&self) -> String {
        format!("{}/", self.scratch_dir_name.trim_end_matches('/'))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
