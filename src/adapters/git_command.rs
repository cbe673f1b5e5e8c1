use std::path::Path;
use std::process::Command;

use git2::Repository;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Clones through the system `git` client and inspects clones with libgit2.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd);

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), AppError> {
        self.run(&["clone", url, "."], destination).map(|_| ())
    }

    fn head_sha(&self, repo: &Path) -> Result<String, AppError> {
        let repo = Repository::open(repo).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })?;
        let head = repo.head().map_err(|e| AppError::GitError {
            command: "git2::Repository::head".to_string(),
            details: e.to_string(),
        })?;
        let target = head.target().ok_or_else(|| AppError::GitError {
            command: "git2::Reference::target".to_string(),
            details: "HEAD is not a direct reference".to_string(),
        })?;
        Ok(target.to_string())
    }
}
