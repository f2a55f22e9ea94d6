//! # Domain Types
//!
//! Core domain types used throughout Emporia.
//!
//! All durable state is owned by PostgreSQL; these types are the in-memory
//! shapes of stored-procedure results plus the one piece of state the
//! application itself holds, the current [`Session`].
//!
//! The row-shaped types derive `sqlx::FromRow` behind the `sqlx` feature so
//! the gateway decodes procedure results positionally exactly once; nothing
//! above the gateway ever touches an untyped row.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;

// =============================================================================
// Role & Session
// =============================================================================

/// Which side of the counter the authenticated user is on.
///
/// The wire tags `"customer"` and `"staff"` are what the `login` stored
/// procedure expects as its third parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Staff,
}

impl Role {
    /// The tag passed to the `login` procedure.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "staff" => Ok(Role::Staff),
            _ => Err(()),
        }
    }
}

/// The resolved identity established after a successful login.
///
/// Held only in memory for the duration of one role-menu loop and dropped
/// on logout; there is no token, cookie, or persistence of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub username: String,
    pub user_id: i32,
}

impl Session {
    pub fn new(role: Role, username: impl Into<String>, user_id: i32) -> Self {
        Session {
            role,
            username: username.into(),
            user_id,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A product as returned by `view_products` / `get_product_by_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    /// Unit price; crosses the wire as `price_cents BIGINT`.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Money,
    /// Units on hand. Decremented by `create_purchase`.
    pub quantity: i32,
}

/// Fields collected from staff when creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub quantity: i32,
}

// =============================================================================
// Credit Cards
// =============================================================================

/// A stored payment card, owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CreditCard {
    #[cfg_attr(feature = "sqlx", sqlx(rename = "card_number"))]
    pub number: String,
    pub expiration: NaiveDate,
}

// =============================================================================
// Registration
// =============================================================================

/// The nine free-text fields collected during customer registration.
///
/// `state` is collected at the prompt but not part of the
/// `register_customer` parameter list; the procedure takes seven fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

// =============================================================================
// Purchase History
// =============================================================================

/// One row of a customer's own purchase history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseLine {
    pub purchase_id: i32,
    pub purchased_at: DateTime<Utc>,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "unit_price_cents"))]
    pub unit_price: Money,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "total_price_cents"))]
    pub total_price: Money,
}

/// One row of the store-wide purchase history visible to staff.
///
/// Same shape as [`PurchaseLine`] plus the purchasing customer's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseAudit {
    pub purchase_id: i32,
    pub purchased_at: DateTime<Utc>,
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "unit_price_cents"))]
    pub unit_price: Money,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "total_price_cents"))]
    pub total_price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_tags() {
        assert_eq!(Role::Customer.as_str(), "customer");
        assert_eq!(Role::Staff.as_str(), "staff");
        assert_eq!("customer".parse(), Ok(Role::Customer));
        assert_eq!("staff".parse(), Ok(Role::Staff));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_session_holds_resolved_identity() {
        let session = Session::new(Role::Customer, "ada", 7);
        assert_eq!(session.role, Role::Customer);
        assert_eq!(session.username, "ada");
        assert_eq!(session.user_id, 7);
    }
}
