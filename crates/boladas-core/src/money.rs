//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Every price is an i64 count of centavos (MZN smallest unit).         │
//! │    MT 45.000 is stored as 4_500_000. No drift, ever.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boladas_core::money::Money;
//!
//! // Create from centavos (preferred) or whole meticais
//! let price = Money::from_meticais(45_000);
//! assert_eq!(price.centavos(), 4_500_000);
//!
//! // Arithmetic operations
//! let pair = price * 2;
//! assert_eq!(pair, Money::from_meticais(90_000));
//!
//! // Display uses the storefront's Portuguese formatting
//! assert_eq!(price.to_string(), "MT 45.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos of the Mozambican metical.
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for discounts/corrections
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support so slices persist as plain integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole meticais.
    ///
    /// ## Example
    /// ```rust
    /// use boladas_core::money::Money;
    ///
    /// let price = Money::from_meticais(45_000);
    /// assert_eq!(price.centavos(), 4_500_000);
    /// ```
    #[inline]
    pub const fn from_meticais(meticais: i64) -> Self {
        Money(meticais * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-metical portion.
    #[inline]
    pub const fn meticais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// CartItem: iPhone 13 Pro, MT 45.000
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: MT 90.000
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount without the currency prefix.
    ///
    /// Uses the storefront's Portuguese conventions: dot as the thousands
    /// separator, comma before centavos, and the fraction omitted entirely
    /// when it is zero (second-hand prices are quoted in whole meticais).
    ///
    /// ## Example
    /// ```rust
    /// use boladas_core::money::Money;
    ///
    /// assert_eq!(Money::from_meticais(45_000).format_amount(), "45.000");
    /// assert_eq!(Money::from_centavos(123_456).format_amount(), "1.234,56");
    /// ```
    pub fn format_amount(&self) -> String {
        let meticais = self.meticais().abs();

        // Group the whole-metical digits in threes, right to left.
        let digits = meticais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().rev().enumerate() {
            if i != 0 && i % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        let grouped: String = grouped.chars().rev().collect();

        let sign = if self.0 < 0 { "-" } else { "" };
        if self.centavos_part() == 0 {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{},{:02}", sign, grouped, self.centavos_part())
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the full storefront price string ("MT 45.000").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MT {}", self.format_amount())
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

/// Multiplication by i64 (for quantity calculations).
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
    fn test_from_meticais() {
        let money = Money::from_meticais(45_000);
        assert_eq!(money.centavos(), 4_500_000);
        assert_eq!(money.meticais(), 45_000);
        assert_eq!(money.centavos_part(), 0);
    }

    #[test]
    fn test_from_centavos() {
        let money = Money::from_centavos(123_456);
        assert_eq!(money.meticais(), 1_234);
        assert_eq!(money.centavos_part(), 56);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_meticais(45_000)), "MT 45.000");
        assert_eq!(format!("{}", Money::from_meticais(650)), "MT 650");
        assert_eq!(format!("{}", Money::from_meticais(1_250_000)), "MT 1.250.000");
        assert_eq!(format!("{}", Money::from_centavos(123_456)), "MT 1.234,56");
        assert_eq!(format!("{}", Money::from_centavos(-55_000)), "MT -550");
        assert_eq!(format!("{}", Money::zero()), "MT 0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_meticais(1_000);
        let b = Money::from_meticais(500);

        assert_eq!(a + b, Money::from_meticais(1_500));
        assert_eq!(a - b, Money::from_meticais(500));
        assert_eq!(a * 3, Money::from_meticais(3_000));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.meticais(), 1_500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_meticais(45_000);
        assert_eq!(unit_price.multiply_quantity(2), Money::from_meticais(90_000));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_centavos(100).is_positive());
        assert!(Money::from_centavos(-100).is_negative());
    }
}
