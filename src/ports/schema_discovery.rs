use std::path::Path;

use crate::domain::{AppError, OasFile};

/// Finds OpenAPI documents in a directory tree.
pub trait SchemaDiscoveryPort {
    /// Immediate entries of `dir` only.
    fn scan(&self, dir: &Path) -> Result<Vec<OasFile>, AppError>;

    /// Depth-first walk of `dir`, skipping dot-prefixed entries.
    fn scan_recursive(&self, dir: &Path) -> Result<Vec<OasFile>, AppError>;
}
