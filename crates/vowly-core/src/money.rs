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
//! │  A ₱350,000 wedding package with a 30% downpayment must never lose     │
//! │  a centavo to rounding drift between the quote, the downpayment, and   │
//! │  the remaining balance.                                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Every amount is an i64 count of centavos. The database, the ledger, │
//! │    and the API all use centavos. Only the UI formats for display.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vowly_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let quote = Money::from_cents(350_000_00); // ₱350,000.00
//!
//! // Arithmetic operations
//! let downpayment = Money::from_cents(105_000_00);
//! let balance = quote - downpayment; // ₱245,000.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(350000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values for refund math
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Booking.total_amount ──┬──► Quote shown to the couple                  │
/// │                         │                                               │
/// │                         └──► remaining_balance ──► payment_progress     │
/// │                                                                         │
/// │  PaymentEvent.amount ──► ledger transform ──► Booking.total_paid        │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vowly_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents ₱10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use vowly_core::money::Money;
    ///
    /// let quote = Money::from_pesos(50_000); // ₱50,000.00
    /// assert_eq!(quote.cents(), 5_000_000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pesos) portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
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

    /// Subtraction that never goes below zero.
    ///
    /// ## Example
    /// ```rust
    /// use vowly_core::money::Money;
    ///
    /// let total = Money::from_cents(50_000_00);
    /// let paid = Money::from_cents(65_000_00); // overpaid
    /// assert_eq!(total.saturating_sub(paid), Money::zero());
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// remaining_balance = total_amount.saturating_sub(total_paid)
    ///
    /// A clamped payment can never produce a negative balance, but stored
    /// data predating the ledger might; the balance shown to the couple is
    /// floored at ₱0.00 either way.
    /// ```
    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }

    /// Computes what percentage of `whole` this value is, as an integer 0-100.
    ///
    /// ## Endpoint Pinning
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  PROGRESS MUST BE HONEST AT THE ENDPOINTS                           │
    /// │                                                                     │
    /// │  Plain rounding lies at the edges:                                  │
    /// │    ₱499 of ₱100,000  → rounds to 0%   (but something WAS paid)     │
    /// │    ₱99,600 of ₱100,000 → rounds to 100% (but it is NOT settled)    │
    /// │                                                                     │
    /// │  This function pins the endpoints:                                  │
    /// │    0%   only when nothing is paid (or whole is zero)               │
    /// │    100% only when fully paid                                        │
    /// │    everything in between clamps to 1..=99                          │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use vowly_core::money::Money;
    ///
    /// let total = Money::from_cents(50_000_00);
    /// assert_eq!(Money::from_cents(15_000_00).ratio_percent(total), 30);
    /// assert_eq!(Money::zero().ratio_percent(total), 0);
    /// assert_eq!(total.ratio_percent(total), 100);
    /// assert_eq!(Money::from_cents(1).ratio_percent(total), 1);
    /// assert_eq!(Money::from_cents(49_999_99).ratio_percent(total), 99);
    /// ```
    pub fn ratio_percent(&self, whole: Money) -> u8 {
        if whole.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        if self.0 >= whole.0 {
            return 100;
        }
        // Use i128 to prevent overflow on large amounts.
        // Formula: round(part * 100 / whole), then clamp into the open
        // interval so the 0/100 endpoints stay exact.
        let pct = (self.0 as i128 * 100 + whole.0 as i128 / 2) / whole.0 as i128;
        (pct as i64).clamp(1, 99) as u8
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₱{}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
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
        assert_eq!(money.pesos(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_pesos() {
        let money = Money::from_pesos(50_000);
        assert_eq!(money.cents(), 5_000_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "₱10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "₱5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-₱5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
        c -= b;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_saturating_sub() {
        let total = Money::from_cents(1000);
        let paid = Money::from_cents(1500);

        assert_eq!(total.saturating_sub(paid), Money::zero());
        assert_eq!(paid.saturating_sub(total).cents(), 500);
        assert_eq!(total.saturating_sub(total), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_ratio_percent_exact() {
        let total = Money::from_cents(50_000_00);
        assert_eq!(Money::from_cents(15_000_00).ratio_percent(total), 30);
        assert_eq!(Money::from_cents(25_000_00).ratio_percent(total), 50);
        assert_eq!(total.ratio_percent(total), 100);
    }

    /// Endpoint pinning: 0 only when nothing paid, 100 only when settled.
    #[test]
    fn test_ratio_percent_endpoints() {
        let total = Money::from_cents(100_000_00);

        // A token payment never rounds down to "nothing paid"
        assert_eq!(Money::from_cents(1).ratio_percent(total), 1);
        assert_eq!(Money::from_cents(499_00).ratio_percent(total), 1);

        // A near-complete payment never rounds up to "settled"
        assert_eq!(Money::from_cents(99_600_00).ratio_percent(total), 99);
        assert_eq!(Money::from_cents(99_999_99).ratio_percent(total), 99);

        // Exact endpoints
        assert_eq!(Money::zero().ratio_percent(total), 0);
        assert_eq!(total.ratio_percent(total), 100);
    }

    #[test]
    fn test_ratio_percent_zero_whole() {
        // An unquoted booking has no meaningful progress
        assert_eq!(Money::from_cents(1000).ratio_percent(Money::zero()), 0);
        assert_eq!(Money::zero().ratio_percent(Money::zero()), 0);
    }

    #[test]
    fn test_ratio_percent_overpayment_clamps() {
        let total = Money::from_cents(1000);
        assert_eq!(Money::from_cents(5000).ratio_percent(total), 100);
    }
}
