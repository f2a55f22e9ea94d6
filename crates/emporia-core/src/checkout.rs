//! # Checkout Gates
//!
//! The purchase transaction is a sequence of client-side gates; every gate
//! must pass before `create_purchase` is invoked, and a single failure
//! aborts the whole flow. Nothing has been written at that point, so there
//! is no rollback path to worry about.
//!
//! ```text
//! product found ──► quantity in (0, stock] ──► has cards ──► card index
//!       │                  │                       │             │
//!       ▼                  ▼                       ▼             ▼
//!   ProductNotFound  InsufficientStock      NoCardsOnFile  InvalidCardSelection
//! ```
//!
//! The gates are pure functions over already-fetched data, so the
//! "procedure call happens iff every gate passes" property is testable
//! without a database.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CreditCard, Product};
use crate::validation::validate_purchase_quantity;

/// Gate 1: the catalog lookup must have produced a row.
pub fn require_product(found: Option<Product>, id: i32) -> CoreResult<Product> {
    found.ok_or(CoreError::ProductNotFound { id })
}

/// Gate 2: quantity must be positive and covered by stock on hand.
pub fn check_stock(product: &Product, requested: i32) -> CoreResult<()> {
    validate_purchase_quantity(requested)?;

    if requested > product.quantity {
        return Err(CoreError::InsufficientStock {
            name: product.name.clone(),
            available: product.quantity,
            requested,
        });
    }

    Ok(())
}

/// Gate 3: checkout requires at least one stored card.
pub fn require_cards(cards: &[CreditCard]) -> CoreResult<()> {
    if cards.is_empty() {
        return Err(CoreError::NoCardsOnFile);
    }
    Ok(())
}

/// Gate 4: resolves a 1-based card index against the listed cards.
pub fn select_card(cards: &[CreditCard], selected: usize) -> CoreResult<&CreditCard> {
    if selected < 1 || selected > cards.len() {
        return Err(CoreError::InvalidCardSelection {
            selected,
            cards: cards.len(),
        });
    }
    Ok(&cards[selected - 1])
}

/// Order total shown in the confirmation summary and charged on completion.
pub fn order_total(product: &Product, quantity: i32) -> Money {
    product.price * quantity
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(price_cents: i64, quantity: i32) -> Product {
        Product {
            id: 7,
            name: "Espresso Beans 1kg".to_string(),
            category: "Pantry".to_string(),
            price: Money::from_cents(price_cents),
            quantity,
        }
    }

    fn card(number: &str) -> CreditCard {
        CreditCard {
            number: number.to_string(),
            expiration: NaiveDate::from_ymd_opt(2027, 4, 30).unwrap(),
        }
    }

    #[test]
    fn test_require_product() {
        let found = require_product(Some(product(1999, 3)), 7).unwrap();
        assert_eq!(found.id, 7);

        let err = require_product(None, 42).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound { id: 42 }));
    }

    #[test]
    fn test_check_stock_accepts_up_to_available() {
        let p = product(1999, 3);
        assert!(check_stock(&p, 1).is_ok());
        assert!(check_stock(&p, 3).is_ok());
    }

    /// Product id=7, price $19.99, qty 3; requesting 5 aborts before any
    /// procedure call is made.
    #[test]
    fn test_check_stock_rejects_over_request() {
        let p = product(1999, 3);
        let err = check_stock(&p, 5).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 3);
                assert_eq!(requested, 5);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
    }

    #[test]
    fn test_check_stock_rejects_non_positive() {
        let p = product(1999, 3);
        assert!(matches!(
            check_stock(&p, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            check_stock(&p, -2),
            Err(CoreError::Validation(_))
        ));
    }

    /// Zero cards on file aborts the purchase before a card index is even
    /// prompted for.
    #[test]
    fn test_require_cards_empty() {
        assert!(matches!(require_cards(&[]), Err(CoreError::NoCardsOnFile)));
        assert!(require_cards(&[card("4111111111111111")]).is_ok());
    }

    #[test]
    fn test_select_card_one_indexed() {
        let cards = vec![card("4111111111111111"), card("5500005555555559")];

        assert_eq!(select_card(&cards, 1).unwrap().number, "4111111111111111");
        assert_eq!(select_card(&cards, 2).unwrap().number, "5500005555555559");

        assert!(matches!(
            select_card(&cards, 0),
            Err(CoreError::InvalidCardSelection { .. })
        ));
        assert!(matches!(
            select_card(&cards, 3),
            Err(CoreError::InvalidCardSelection { .. })
        ));
    }

    #[test]
    fn test_order_total() {
        let p = product(1999, 10);
        assert_eq!(order_total(&p, 5), Money::from_cents(9995));
        assert_eq!(order_total(&p, 1), Money::from_cents(1999));
    }
}
