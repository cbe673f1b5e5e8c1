use std::fmt;
use std::io;

use thiserror::Error;

/// Library-wide error type for api-mock-runner operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Run-control file could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Discovery produced no OpenAPI documents under the resolved origin.
    #[error("No OpenAPI schema found in the given directory.")]
    OpenApiSchemaNotFound,

    /// A port supplied on the command line could not be used.
    #[error("Invalid port '{0}': enter a valid port number between 0 and 65535")]
    InvalidPort(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The user cancelled an interactive prompt.
    #[error("Prompt cancelled by user")]
    PromptInterrupted,

    /// The external mock server rejected a schema or failed to start.
    #[error("Mock server for '{schema}' failed: {details}")]
    MockServer { schema: String, details: String },
}

/// How serious a fatal error is when reported at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn severity(&self) -> Severity {
        match self {
            AppError::PromptInterrupted | AppError::InvalidPort(_) => Severity::Low,
            AppError::OpenApiSchemaNotFound
            | AppError::Configuration(_)
            | AppError::Prompt(_)
            | AppError::MockServer { .. } => Severity::Medium,
            AppError::Io(_) | AppError::Json(_) | AppError::GitError { .. } => Severity::Critical,
        }
    }

    /// Pipeline stage the error originated from.
    pub fn emitter(&self) -> &'static str {
        match self {
            AppError::Io(_) => "filesystem",
            AppError::Json(_) => "config_store",
            AppError::Configuration(_) => "settings",
            AppError::GitError { .. } => "repository_acquirer",
            AppError::OpenApiSchemaNotFound => "oas_discovery",
            AppError::InvalidPort(_) => "port_allocator",
            AppError::Prompt(_) | AppError::PromptInterrupted => "prompter",
            AppError::MockServer { .. } => "mock_server",
        }
    }
}
