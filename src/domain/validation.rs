//! Inline validators for interactive prompts.
//!
//! A failed validation is never fatal: the `Display` text of
//! [`ValidationError`] is shown next to the prompt and the user is asked again.

use std::path::Path;

use thiserror::Error;

use super::origin::is_remote_origin;
use super::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid remote origin (https:// or git@) or local path.")]
    InvalidOrigin,
    #[error("Enter a valid port number between 0 and 65535.")]
    InvalidPort,
    #[error("Port already in use.")]
    PortInUse,
}

/// Accepts an existing local path or a well-formed remote repository URL.
pub fn validate_origin(value: &str) -> Result<(), ValidationError> {
    if Path::new(value).exists() || is_remote_origin(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOrigin)
    }
}

/// Parses `input` as a port and rejects ports already taken in this selection.
///
/// Only the in-progress selection is consulted, not the ports bound on the host.
pub fn validate_port(input: &str, already_selected: &[Schema]) -> Result<u16, ValidationError> {
    let port = input
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| u16::try_from(value).ok())
        .ok_or(ValidationError::InvalidPort)?;

    if already_selected.iter().any(|schema| schema.port == port) {
        return Err(ValidationError::PortInUse);
    }
    Ok(port)
}
