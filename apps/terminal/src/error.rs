//! # Application Error Type
//!
//! `AppError` is what every flow function returns. Its `Display` output is
//! the user-facing message, so the menu loops present failures uniformly:
//! print the error, stay in the menu. Only terminal I/O errors propagate
//! further, because without a working terminal there is no menu to stay in.

use thiserror::Error;

use emporia_core::CoreError;
use emporia_db::DbError;

/// Errors surfaced to the user by the menu loops.
#[derive(Debug, Error)]
pub enum AppError {
    /// Non-numeric input where a number was expected. Aborts the current
    /// flow; the purchase flow in particular does not retry.
    #[error("Invalid input. Please enter valid numbers.")]
    InvalidInput,

    /// Registration hit the username unique constraint. Kept distinct from
    /// the generic database error so the message can be specific.
    #[error("Username already exists. Please choose another.")]
    UsernameTaken,

    /// A business rule said no (insufficient stock, no cards, bad card
    /// index, product not found). The CoreError message is shown as-is.
    #[error("{0}")]
    Rule(#[from] CoreError),

    /// The gateway or a stored procedure failed.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The terminal itself failed (closed stdin, broken pipe). Fatal to
    /// the session rather than reported into it.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(
            AppError::InvalidInput.to_string(),
            "Invalid input. Please enter valid numbers."
        );
    }

    #[test]
    fn test_username_taken_message() {
        assert_eq!(
            AppError::UsernameTaken.to_string(),
            "Username already exists. Please choose another."
        );
    }

    #[test]
    fn test_rule_errors_pass_through() {
        let err: AppError = CoreError::NoCardsOnFile.into();
        assert_eq!(
            err.to_string(),
            "No credit cards found. Please add a card first."
        );
    }
}
