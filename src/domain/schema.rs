use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A schema file paired with the port its mock server listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub path: String,
    pub port: u16,
}

impl Schema {
    pub fn new(path: impl Into<String>, port: u16) -> Self {
        Self { path: path.into(), port }
    }
}

/// A file that passed the OpenAPI sniff test during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OasFile {
    pub file_name: String,
    /// Directory containing the file.
    pub path: PathBuf,
    pub file_path: PathBuf,
}

impl OasFile {
    pub fn new(dir: PathBuf, file_name: String) -> Self {
        let file_path = dir.join(&file_name);
        Self { file_name, path: dir, file_path }
    }

    pub fn file_path_string(&self) -> String {
        self.file_path.to_string_lossy().into_owned()
    }
}
