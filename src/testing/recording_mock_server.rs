use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Schema};
use crate::ports::{MockServer, MockServerFactory};

/// Records `validate`/`mock`/`stop` calls in order across all created servers.
#[derive(Default)]
pub struct RecordingMockServerFactory {
    events: Arc<Mutex<Vec<String>>>,
    failing_path: Option<String>,
}

impl RecordingMockServerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make validation fail for the schema at `path`.
    pub fn failing_on(mut self, path: &str) -> Self {
        self.failing_path = Some(path.to_string());
        self
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

pub struct RecordingMockServer {
    schema: Schema,
    events: Arc<Mutex<Vec<String>>>,
    fail_validation: bool,
}

impl RecordingMockServer {
    fn record(&self, action: &str) {
        let entry = format!("{action} {}:{}", self.schema.path, self.schema.port);
        self.events.lock().unwrap().push(entry);
    }
}

impl MockServer for RecordingMockServer {
    fn validate(&mut self) -> Result<(), AppError> {
        self.record("validate");
        if self.fail_validation {
            return Err(AppError::MockServer {
                schema: self.schema.path.clone(),
                details: "invalid schema".into(),
            });
        }
        Ok(())
    }

    fn mock(&mut self) -> Result<(), AppError> {
        self.record("mock");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AppError> {
        self.record("stop");
        Ok(())
    }
}

impl MockServerFactory for RecordingMockServerFactory {
    type Server = RecordingMockServer;

    fn create(&self, schema: &Schema) -> RecordingMockServer {
        RecordingMockServer {
            schema: schema.clone(),
            events: Arc::clone(&self.events),
            fail_validation: self.failing_path.as_deref() == Some(schema.path.as_str()),
        }
    }
}
