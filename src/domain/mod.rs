pub mod error;
pub mod messages;
pub mod origin;
pub mod run_config;
pub mod schema;
pub mod settings;
pub mod validation;

pub use error::{AppError, Severity};
pub use origin::{Origin, is_remote_origin};
pub use run_config::RunConfig;
pub use schema::{OasFile, Schema};
pub use settings::RunnerSettings;
pub use validation::{ValidationError, validate_origin, validate_port};
