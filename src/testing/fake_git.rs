use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Materializes a fixed file tree instead of cloning.
#[derive(Default)]
pub struct FakeGit {
    files: Vec<(String, String)>,
    failure: Option<String>,
    cloned_urls: Mutex<Vec<String>>,
    destination_was_empty: Mutex<bool>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(details: &str) -> Self {
        Self { failure: Some(details.to_string()), ..Self::default() }
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn cloned_urls(&self) -> Vec<String> {
        self.cloned_urls.lock().unwrap().clone()
    }

    pub fn destination_was_empty(&self) -> bool {
        *self.destination_was_empty.lock().unwrap()
    }
}

impl GitPort for FakeGit {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), AppError> {
        self.cloned_urls.lock().unwrap().push(url.to_string());
        if let Some(details) = &self.failure {
            return Err(AppError::GitError {
                command: format!("git clone {url} ."),
                details: details.clone(),
            });
        }

        *self.destination_was_empty.lock().unwrap() = fs::read_dir(destination)?.next().is_none();
        for (relative, content) in &self.files {
            let path = destination.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        Ok(())
    }

    fn head_sha(&self, _repo: &Path) -> Result<String, AppError> {
        Ok("abc123".into())
    }
}
