use crate::domain::{AppError, ValidationError};

/// Validator run against each answer; an `Err` re-asks with its message.
pub type InputValidator<'a> = &'a dyn Fn(&str) -> Result<(), ValidationError>;

/// Interactive terminal input.
pub trait PrompterPort {
    /// Ask for a line of text until `validate` accepts it.
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> Result<String, AppError>;

    /// Let the user pick any number of `items`; returns the chosen indices.
    fn multi_select(&self, message: &str, items: &[String]) -> Result<Vec<usize>, AppError>;

    /// Yes/no question.
    fn confirm(&self, message: &str) -> Result<bool, AppError>;
}
