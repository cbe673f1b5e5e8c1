//! Run-control file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{AppError, RunConfig, messages};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Load the saved config. A missing or malformed file is not an error.
    pub fn load(&self) -> Option<RunConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                warn!("{} {}", messages::CONFIG_FILE_NOT_FOUND, self.file_name());
                return None;
            }
        };
        match RunConfig::from_json(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!("{} ({})", messages::config_file_invalid(&self.file_name()), err);
                None
            }
        }
    }

    /// Overwrite the run-control file with `config` as tab-indented JSON.
    pub fn save(&self, config: &RunConfig) -> Result<(), AppError> {
        fs::write(&self.path, config.to_pretty_json()?)?;
        Ok(())
    }
}
