//! # Stored-Procedure Wrappers
//!
//! One typed method per stored procedure, grouped by area. Each wrapper
//! ensures a connection, binds its positional parameters, fetches all
//! rows, and decodes them into `emporia-core` record types; callers never
//! see an untyped row. Every call auto-commits.
//!
//! - [`auth`] - `login`, `register_customer`
//! - [`catalog`] - `view_products`, `get_product_by_id`, `add_product`
//! - [`cards`] - `view_credit_cards`, `add_credit_card`, `remove_credit_card`
//! - [`purchases`] - `create_purchase`, `user_purchase_history`, `view_purchase_history`

pub mod auth;
pub mod cards;
pub mod catalog;
pub mod purchases;
