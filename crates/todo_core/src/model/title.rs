//! Task title validation.
//!
//! # Responsibility
//! - Normalize raw title input (trim) before any write.
//! - Classify input as valid, empty or too long with user-facing messages.
//!
//! # Invariants
//! - Validation is pure and never allocates on the success path.
//! - Length is measured in Unicode scalar values after trimming.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length after trimming.
pub const MAX_TITLE_CHARS: usize = 100;

const EMPTY_TITLE_MESSAGE: &str = "you cannot leave an empty field.";
const TOO_LONG_TITLE_MESSAGE: &str = "task is too long.";

/// Rejected title input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleValidationError {
    /// Trimmed input is empty.
    Empty,
    /// Trimmed input exceeds [`MAX_TITLE_CHARS`].
    TooLong { chars: usize },
}

impl TitleValidationError {
    /// Message shown next to the input field.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Empty => EMPTY_TITLE_MESSAGE,
            Self::TooLong { .. } => TOO_LONG_TITLE_MESSAGE,
        }
    }
}

impl Display for TitleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task title must not be blank"),
            Self::TooLong { chars } => write!(
                f,
                "task title has {chars} characters; maximum is {MAX_TITLE_CHARS}"
            ),
        }
    }
}

impl Error for TitleValidationError {}

/// Validates raw title input.
///
/// Returns the trimmed title on success.
///
/// # Errors
/// - [`TitleValidationError::Empty`] when the trimmed input is empty.
/// - [`TitleValidationError::TooLong`] when it exceeds [`MAX_TITLE_CHARS`].
pub fn validate_title(raw: &str) -> Result<&str, TitleValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TitleValidationError::Empty);
    }

    let chars = trimmed.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(TitleValidationError::TooLong { chars });
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{validate_title, TitleValidationError, MAX_TITLE_CHARS};

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_title("  Walk dog \n"), Ok("Walk dog"));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(validate_title(" \t "), Err(TitleValidationError::Empty));
        assert_eq!(validate_title(""), Err(TitleValidationError::Empty));
    }

    #[test]
    fn limit_is_inclusive_and_counts_chars_not_bytes() {
        let exact = "é".repeat(MAX_TITLE_CHARS);
        assert_eq!(validate_title(&exact), Ok(exact.as_str()));

        let over = "x".repeat(MAX_TITLE_CHARS + 1);
        assert_eq!(
            validate_title(&over),
            Err(TitleValidationError::TooLong { chars: 101 })
        );
    }

    #[test]
    fn padding_does_not_count_toward_limit() {
        let padded = format!("   {}   ", "a".repeat(MAX_TITLE_CHARS));
        assert!(validate_title(&padded).is_ok());
    }

    #[test]
    fn user_messages_are_stable() {
        assert_eq!(
            TitleValidationError::Empty.user_message(),
            "you cannot leave an empty field."
        );
        assert_eq!(
            TitleValidationError::TooLong { chars: 120 }.user_message(),
            "task is too long."
        );
    }
}
