//! Questions the engine may need to ask while applying a change.
//!
//! Operations never read stdin themselves; front ends supply a [`Prompter`].

use crate::errors::RoostError;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Cannot prompt: {message}")]
    Unavailable { message: String },

    #[error("IO error while prompting: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl RoostError for PromptError {
    fn error_code(&self) -> &'static str {
        match self {
            PromptError::Unavailable { .. } => "PROMPT_UNAVAILABLE",
            PromptError::IoError { .. } => "PROMPT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PromptError::Unavailable { .. })
    }
}

pub trait Prompter {
    /// Yes/no question. `false` aborts the operation that asked.
    fn confirm(&self, message: &str) -> Result<bool, PromptError>;

    /// Pick one of `options`; `None` means "none of them".
    fn select(&self, message: &str, options: &[String]) -> Result<Option<usize>, PromptError>;

    /// Free text; `None` or blank means the user declined.
    fn input(&self, message: &str) -> Result<Option<String>, PromptError>;
}

/// Answers every question negatively. Used for non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

impl Prompter for DeclineAll {
    fn confirm(&self, _message: &str) -> Result<bool, PromptError> {
        Ok(false)
    }

    fn select(&self, _message: &str, _options: &[String]) -> Result<Option<usize>, PromptError> {
        Ok(None)
    }

    fn input(&self, _message: &str) -> Result<Option<String>, PromptError> {
        Ok(None)
    }
}
