use crate::domain::{AppError, Schema};

/// One mock server instance serving a single schema.
pub trait MockServer {
    /// Check that the schema can be served.
    fn validate(&mut self) -> Result<(), AppError>;

    /// Start serving.
    fn mock(&mut self) -> Result<(), AppError>;

    /// Stop serving. No-op if the server was never started.
    fn stop(&mut self) -> Result<(), AppError>;
}

/// Builds a [`MockServer`] for each selected schema.
pub trait MockServerFactory {
    type Server: MockServer;

    fn create(&self, schema: &Schema) -> Self::Server;
}
