use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{InputValidator, PrompterPort};

/// Answers prompts from pre-recorded queues and records what was asked.
///
/// An empty text answer takes the prompt's default. A rejected answer is
/// recorded and the next queued answer is tried, like a user re-typing.
/// Running out of answers behaves like a cancelled prompt.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: Mutex<VecDeque<String>>,
    selections: Mutex<VecDeque<Vec<usize>>>,
    confirms: Mutex<VecDeque<bool>>,
    input_messages: Mutex<Vec<String>>,
    input_defaults: Mutex<Vec<Option<String>>>,
    validation_errors: Mutex<Vec<String>>,
    select_messages: Mutex<Vec<String>>,
    confirm_messages: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.lock().unwrap().extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn with_selections<I: IntoIterator<Item = Vec<usize>>>(self, answers: I) -> Self {
        self.selections.lock().unwrap().extend(answers);
        self
    }

    pub fn with_confirms<I: IntoIterator<Item = bool>>(self, answers: I) -> Self {
        self.confirms.lock().unwrap().extend(answers);
        self
    }

    pub fn input_messages(&self) -> Vec<String> {
        self.input_messages.lock().unwrap().clone()
    }

    pub fn input_defaults(&self) -> Vec<Option<String>> {
        self.input_defaults.lock().unwrap().clone()
    }

    pub fn validation_errors(&self) -> Vec<String> {
        self.validation_errors.lock().unwrap().clone()
    }

    pub fn select_messages(&self) -> Vec<String> {
        self.select_messages.lock().unwrap().clone()
    }

    pub fn confirm_messages(&self) -> Vec<String> {
        self.confirm_messages.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.input_messages.lock().unwrap().len()
            + self.select_messages.lock().unwrap().len()
            + self.confirm_messages.lock().unwrap().len()
    }
}

impl PrompterPort for ScriptedPrompter {
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> Result<String, AppError> {
        self.input_messages.lock().unwrap().push(message.to_string());
        self.input_defaults.lock().unwrap().push(default.map(str::to_string));

        loop {
            let answer = self.inputs.lock().unwrap().pop_front().ok_or(AppError::PromptInterrupted)?;
            let answer = match default {
                Some(default) if answer.is_empty() => default.to_string(),
                _ => answer,
            };
            match validate(answer.as_str()) {
                Ok(()) => return Ok(answer),
                Err(err) => self.validation_errors.lock().unwrap().push(err.to_string()),
            }
        }
    }

    fn multi_select(&self, message: &str, _items: &[String]) -> Result<Vec<usize>, AppError> {
        self.select_messages.lock().unwrap().push(message.to_string());
        self.selections.lock().unwrap().pop_front().ok_or(AppError::PromptInterrupted)
    }

    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        self.confirm_messages.lock().unwrap().push(message.to_string());
        self.confirms.lock().unwrap().pop_front().ok_or(AppError::PromptInterrupted)
    }
}
