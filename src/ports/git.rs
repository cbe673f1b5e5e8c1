use std::path::Path;

use crate::domain::AppError;

pub trait GitPort {
    /// Clone `url` into `destination`, which must already exist and be empty.
    fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), AppError>;

    /// Get the HEAD SHA of the repository at `repo`.
    fn head_sha(&self, repo: &Path) -> Result<String, AppError>;
}
