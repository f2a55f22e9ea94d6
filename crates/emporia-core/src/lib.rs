//! # emporia-core: Pure Business Logic for Emporia
//!
//! Everything the terminal application decides *before* touching the
//! database lives here: money arithmetic, the domain types decoded from
//! stored-procedure results, input validation, and the checkout gates that
//! decide whether a purchase may be recorded at all.
//!
//! ## Architecture Position
//! ```text
//! apps/terminal (menus, prompts, rendering)
//!        │
//!        ▼
//! emporia-core (THIS CRATE)  ── pure rules: Money, Session, checkout gates
//!        │
//!        ▼
//! emporia-db (gateway)       ── stored-procedure calls over one connection
//!        │
//!        ▼
//! PostgreSQL                 ── owns all durable state and business writes
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Session, Product, CreditCard, history rows)
//! - [`money`] - Money type with integer arithmetic (no floating point)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`checkout`] - Purchase-transaction gates
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output, no side effects
//! 2. **No I/O**: database and terminal access are forbidden here
//! 3. **Integer money**: all monetary values are cents (i64), never floats
//! 4. **Explicit errors**: typed enums, never strings or panics

pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// Re-exports so users can write `use emporia_core::Money` instead of
// `use emporia_core::money::Money`.

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
