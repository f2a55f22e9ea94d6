//! # Error Types
//!
//! Domain-specific error types for emporia-core.
//!
//! The full ladder across the workspace:
//!
//! - `CoreError` / `ValidationError` - this file, business rules and input rules
//! - `DbError` - emporia-db, database operation failures
//! - `AppError` - apps/terminal, what the user sees at the menu loop

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business-rule violations detected before a mutating procedure call.
///
/// Each variant carries enough context to render the user-facing message
/// directly; the terminal app prints `Display` output as-is.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product row came back for the requested id.
    #[error("Product not found: {id}")]
    ProductNotFound { id: i32 },

    /// Requested quantity exceeds what is on hand.
    ///
    /// Detected client-side before `create_purchase` is invoked; the
    /// purchase flow aborts without any procedure call.
    #[error("Not enough stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i32,
        requested: i32,
    },

    /// The customer has no stored cards, so checkout cannot continue.
    #[error("No credit cards found. Please add a card first.")]
    NoCardsOnFile,

    /// 1-based card index outside the listed range.
    #[error("Invalid card selection: {selected} (choose 1-{cards})")]
    InvalidCardSelection { selected: usize, cards: usize },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures, raised before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value must not be negative. Zero is allowed.
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Espresso Beans 1kg".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for Espresso Beans 1kg: available 3, requested 5"
        );

        let err = CoreError::InvalidCardSelection {
            selected: 4,
            cards: 2,
        };
        assert_eq!(err.to_string(), "Invalid card selection: 4 (choose 1-2)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Negative { field: "price" };
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
