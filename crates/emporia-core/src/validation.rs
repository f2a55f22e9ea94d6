//! # Validation Module
//!
//! Input validation rules shared by the terminal flows.
//!
//! These run on already-parsed values; parse failures ("abc" where a number
//! was expected) are the terminal layer's concern. The rules here are the
//! ones the database is never asked to arbitrate: a non-positive purchase
//! quantity or a negative price never reaches a stored procedure.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A purchase quantity must be strictly positive.
pub fn validate_purchase_quantity(qty: i32) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    Ok(())
}

/// A product price may be zero (free item) but never negative.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative { field: "price" });
    }
    Ok(())
}

/// Initial stock may be zero but never negative.
pub fn validate_stock_quantity(qty: i32) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative { field: "quantity" });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_purchase_quantity() {
        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(999).is_ok());

        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(1999)).is_ok());
        assert!(validate_price(Money::from_cents(-500)).is_err());
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(40).is_ok());
        assert!(validate_stock_quantity(-3).is_err());
    }
}
