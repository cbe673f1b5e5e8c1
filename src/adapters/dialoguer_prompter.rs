use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect};

use crate::domain::AppError;
use crate::ports::{InputValidator, PrompterPort};

/// Terminal prompts rendered with dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(what: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            AppError::PromptInterrupted
        }
        err => AppError::Prompt(format!("Failed to read {what}: {err}")),
    }
}

impl PrompterPort for DialoguerPrompter {
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> Result<String, AppError> {
        let mut input = Input::<String>::new()
            .with_prompt(message)
            .validate_with(|value: &String| validate(value.as_str()).map_err(|e| e.to_string()));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| prompt_error("input", e))
    }

    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>, AppError> {
        MultiSelect::new()
            .with_prompt(message)
            .items(items)
            .interact()
            .map_err(|e| prompt_error("selection", e))
    }

    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()
            .map_err(|e| prompt_error("confirmation", e))
    }
}
