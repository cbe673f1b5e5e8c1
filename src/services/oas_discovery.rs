//! OpenAPI document discovery by first-line sniffing.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{AppError, OasFile, messages};
use crate::ports::SchemaDiscoveryPort;

const OAS_PREFIX: &str = "openapi";

/// Read the first line of `path`, without its line terminator.
///
/// Returns `None` for an empty file. Invalid UTF-8 is replaced rather than rejected.
pub fn first_line(path: &Path) -> Result<Option<String>, AppError> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Case-insensitive `openapi` prefix test on the first line.
pub fn is_oas(path: &Path) -> Result<bool, AppError> {
    Ok(first_line(path)?.is_some_and(|line| {
        line.get(..OAS_PREFIX.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(OAS_PREFIX))
    }))
}

fn has_yaml_extension(file_name: &str) -> bool {
    file_name.ends_with(".yaml") || file_name.ends_with(".yml")
}

/// [`SchemaDiscoveryPort`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDiscovery;

impl FilesystemDiscovery {
    pub fn new() -> Self {
        Self
    }

    fn collect_recursive(&self, dir: &Path, found: &mut Vec<OasFile>) -> Result<(), AppError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.starts_with('.') {
                continue;
            }
            let entry_path = entry.path();
            // symlink_metadata: linked directories are not followed.
            if fs::symlink_metadata(&entry_path)?.is_dir() {
                self.collect_recursive(&entry_path, found)?;
            } else if has_yaml_extension(&file_name) && is_oas(&entry_path)? {
                found.push(OasFile::new(dir.to_path_buf(), file_name));
            }
        }
        Ok(())
    }
}

impl SchemaDiscoveryPort for FilesystemDiscovery {
    fn scan(&self, dir: &Path) -> Result<Vec<OasFile>, AppError> {
        if !dir.exists() {
            warn!("{} {}", messages::DIRECTORY_NOT_FOUND, dir.display());
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let entry_path = entry.path();
            if has_yaml_extension(&file_name) && entry_path.is_file() && is_oas(&entry_path)? {
                found.push(OasFile::new(dir.to_path_buf(), file_name));
            }
        }
        debug!(dir = %dir.display(), count = found.len(), "scanned directory for OpenAPI documents");
        Ok(found)
    }

    fn scan_recursive(&self, dir: &Path) -> Result<Vec<OasFile>, AppError> {
        if !dir.exists() {
            warn!("{} {}", messages::DIRECTORY_NOT_FOUND, dir.display());
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        self.collect_recursive(dir, &mut found)?;
        debug!(dir = %dir.display(), count = found.len(), "walked directory tree for OpenAPI documents");
        Ok(found)
    }
}
