//! api-mock-runner: resolve OpenAPI schemas from a local folder or git
//! repository, assign ports, persist the selection, and start mock servers.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppContext, EntryFlow, RunOptions};
pub use domain::{AppError, OasFile, Origin, RunConfig, RunnerSettings, Schema, Severity};
