use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AppError, OasFile};
use crate::ports::SchemaDiscoveryPort;

/// Delegates to a real discovery and records every call.
pub struct SpyDiscovery<D> {
    inner: D,
    calls: Mutex<Vec<String>>,
}

impl<D: SchemaDiscoveryPort> SpyDiscovery<D> {
    pub fn new(inner: D) -> Self {
        Self { inner, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl<D: SchemaDiscoveryPort> SchemaDiscoveryPort for SpyDiscovery<D> {
    fn scan(&self, dir: &Path) -> Result<Vec<OasFile>, AppError> {
        self.calls.lock().unwrap().push(format!("scan:{}", dir.display()));
        self.inner.scan(dir)
    }

    fn scan_recursive(&self, dir: &Path) -> Result<Vec<OasFile>, AppError> {
        self.calls.lock().unwrap().push(format!("scan_recursive:{}", dir.display()));
        self.inner.scan_recursive(dir)
    }
}
