//! Port assignment for selected schemas.

use crate::domain::{AppError, Schema, messages, validate_port};
use crate::ports::PrompterPort;

/// Prompt for a port per schema, suggesting one past the last accepted port.
pub fn ask_for_ports(
    prompter: &(impl PrompterPort + ?Sized),
    schema_paths: &[String],
    default_port: u16,
) -> Result<Vec<Schema>, AppError> {
    let mut selected: Vec<Schema> = Vec::with_capacity(schema_paths.len());
    let mut suggested = default_port;

    for schema_path in schema_paths {
        let answer = {
            let validate = |input: &str| validate_port(input, &selected).map(|_| ());
            prompter.input(
                &messages::input_port(schema_path),
                Some(&suggested.to_string()),
                &validate,
            )?
        };
        let port = validate_port(&answer, &selected).map_err(|_| AppError::InvalidPort(answer))?;
        selected.push(Schema::new(schema_path.clone(), port));
        suggested = port.checked_add(1).unwrap_or(default_port);
    }
    Ok(selected)
}

/// Pair schemas with ports by index, without prompting.
///
/// Schemas past the end of `ports` continue counting up from the last explicit
/// port. With no ports at all every schema gets `default_port`, duplicates included.
pub fn assign_ports(
    schema_paths: &[String],
    ports: &[String],
    default_port: u16,
) -> Result<Vec<Schema>, AppError> {
    let Some(last) = ports.last() else {
        return Ok(schema_paths.iter().map(|path| Schema::new(path.clone(), default_port)).collect());
    };
    let last_port = parse_port(last)?;

    schema_paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let port = match ports.get(i) {
                Some(explicit) => parse_port(explicit)?,
                None => {
                    let offset = i + 1 - ports.len();
                    u16::try_from(usize::from(last_port) + offset)
                        .map_err(|_| AppError::InvalidPort(format!("{last_port}+{offset}")))?
                }
            };
            Ok(Schema::new(path.clone(), port))
        })
        .collect()
}

fn parse_port(value: &str) -> Result<u16, AppError> {
    value.trim().parse::<u16>().map_err(|_| AppError::InvalidPort(value.to_string()))
}
