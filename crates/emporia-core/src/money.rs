//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All monetary values in the system are integer cents. Prices cross the
//! database boundary as `BIGINT` cents and only become "$19.99" when a
//! table or purchase summary is rendered. There is deliberately no
//! constructor from `f64`.
//!
//! ## Usage
//! ```rust
//! use emporia_core::money::Money;
//!
//! let price = Money::from_cents(1999); // $19.99
//! let total: Money = price * 5;        // $99.95
//! assert_eq!(total.to_string(), "$99.95");
//!
//! // Terminal input parses with integer math only:
//! let typed: Money = "19.99".parse().unwrap();
//! assert_eq!(typed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that subtraction and parse results can represent negative
/// amounts; the validation layer decides where negatives are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use emporia_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, giving a line total.
    ///
    /// ## Example
    /// ```rust
    /// use emporia_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1999);
    /// assert_eq!(unit_price.multiply_quantity(5).cents(), 9995);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error parsing a dollar amount typed at the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid dollar amount")]
pub struct ParseMoneyError;

/// Parses amounts as typed at a prompt: `"5"`, `"19.99"`, `"-5"`, `"0.50"`.
///
/// At most two fraction digits are accepted; a bare `"1.999"` is an error
/// rather than a silent rounding. Integer math throughout.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if s.is_empty() {
            return Err(ParseMoneyError);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError);
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError);
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError)?
        };

        let cents: i64 = if fraction.is_empty() {
            0
        } else {
            // "5" after a decimal point means 50 cents, not 5
            let parsed: i64 = fraction.parse().map_err(|_| ParseMoneyError)?;
            if fraction.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        let total = dollars * 100 + cents;
        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, the format every table and summary uses.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer quantity.
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(1999);
        let line_total = unit_price.multiply_quantity(5);
        assert_eq!(line_total.cents(), 9995);
    }

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!("5".parse::<Money>().unwrap().cents(), 500);
        assert_eq!("120".parse::<Money>().unwrap().cents(), 12000);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_dollars_and_cents() {
        assert_eq!("19.99".parse::<Money>().unwrap().cents(), 1999);
        assert_eq!("0.50".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("0.5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!(".25".parse::<Money>().unwrap().cents(), 25);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
    }

    #[test]
    fn test_parse_negative() {
        // The staff add-product flow relies on "-5" parsing so it can be
        // rejected by validation, not by the parser.
        assert_eq!("-5".parse::<Money>().unwrap().cents(), -500);
        assert_eq!("-0.99".parse::<Money>().unwrap().cents(), -99);
        assert!("-5".parse::<Money>().unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.999".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("$5".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 19.99 ".parse::<Money>().unwrap().cents(), 1999);
    }
}
