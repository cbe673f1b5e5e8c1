use std::fs;
use std::path::Path;
use std::process::{Child, Command};

use tracing::{debug, info, warn};

use crate::domain::{AppError, Schema};
use crate::ports::{MockServer, MockServerFactory};

/// Runs an external OpenAPI mocker as a child process, one per schema.
#[derive(Debug)]
pub struct ProcessMockServer {
    schema: Schema,
    command: String,
    child: Option<Child>,
}

impl ProcessMockServer {
    pub fn new(schema: Schema, command: impl Into<String>) -> Self {
        Self { schema, command: command.into(), child: None }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    fn error(&self, details: impl Into<String>) -> AppError {
        AppError::MockServer { schema: self.schema.path.clone(), details: details.into() }
    }

    /// Block until the spawned server exits. No-op if it was never started.
    pub fn wait(&mut self) -> Result<(), AppError> {
        let Some(child) = self.child.as_mut() else {
            return Ok(());
        };
        let status = child.wait()?;
        if !status.success() {
            warn!("Mock server for {} exited with {}", self.schema.path, status);
        }
        self.child = None;
        Ok(())
    }
}

impl MockServer for ProcessMockServer {
    fn validate(&mut self) -> Result<(), AppError> {
        let path = Path::new(&self.schema.path);
        if !path.is_file() {
            return Err(self.error("schema file not found"));
        }
        let content = fs::read_to_string(path).map_err(|e| self.error(e.to_string()))?;
        let document: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| self.error(format!("invalid YAML: {e}")))?;
        if !document.is_mapping() {
            return Err(self.error("schema document is not a YAML mapping"));
        }
        Ok(())
    }

    fn mock(&mut self) -> Result<(), AppError> {
        let port = self.schema.port.to_string();
        let child = Command::new(&self.command)
            .args(["--port", &port, "--schema", &self.schema.path, "--watch"])
            .spawn()
            .map_err(|e| self.error(format!("could not start '{}': {e}", self.command)))?;
        info!("Mock server for {} listening on port {}", self.schema.path, self.schema.port);
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AppError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        if let Err(err) = child.kill() {
            debug!("Mock server for {} already exited: {}", self.schema.path, err);
        }
        child.wait()?;
        info!("Stopped mock server for {}", self.schema.path);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ProcessMockServerFactory {
    command: String,
}

impl ProcessMockServerFactory {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

impl MockServerFactory for ProcessMockServerFactory {
    type Server = ProcessMockServer;

    fn create(&self, schema: &Schema) -> ProcessMockServer {
        ProcessMockServer::new(schema.clone(), self.command.clone())
    }
}
