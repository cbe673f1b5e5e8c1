//! Fresh clones of remote schema repositories into the scratch directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::GitPort;

/// Replace `scratch_dir` with a fresh clone of `repository_url`.
///
/// The directory is always removed and recreated before cloning so stale
/// schema files never survive. A clone failure is returned as-is; the
/// directory contents are undefined afterwards and must not be scanned.
pub fn acquire(
    git: &(impl GitPort + ?Sized),
    repository_url: &str,
    scratch_dir: &Path,
) -> Result<(), AppError> {
    if scratch_dir.exists() {
        debug!(dir = %scratch_dir.display(), "removing previous clone");
        fs::remove_dir_all(scratch_dir)?;
    }
    fs::create_dir_all(scratch_dir)?;

    info!("Cloning {} into {}", repository_url, scratch_dir.display());
    git.clone_repository(repository_url, scratch_dir)?;

    match git.head_sha(scratch_dir) {
        Ok(sha) => info!("Cloned {} at {}", repository_url, sha),
        Err(err) => debug!("Could not read HEAD of fresh clone: {}", err),
    }
    Ok(())
}
