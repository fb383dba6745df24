//! Whole-rupee money amounts.
//!
//! Every price in the catalog is a whole number of rupees, so amounts are
//! plain integers. Fractional arithmetic (the cash-on-delivery advance) goes
//! through [`rust_decimal`] and is rounded back to whole rupees.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount of Indian rupees with no minor unit.
///
/// Displays with the `en-IN` digit grouping and no fraction digits:
///
/// ```
/// use swariva_core::Rupees;
///
/// assert_eq!(Rupees::new(999).to_string(), "₹999");
/// assert_eq!(Rupees::new(123_456).to_string(), "₹1,23,456");
/// assert_eq!(Rupees::new(12_345_678).to_string(), "₹1,23,45,678");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole rupees.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole rupees.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract, stopping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Multiply by a fraction and round half away from zero to whole rupees.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use swariva_core::Rupees;
    ///
    /// let quarter = Decimal::new(25, 2);
    /// assert_eq!(Rupees::new(1000).scale_rounded(quarter), Rupees::new(250));
    /// assert_eq!(Rupees::new(1002).scale_rounded(quarter), Rupees::new(251));
    /// ```
    #[must_use]
    pub fn scale_rounded(self, factor: Decimal) -> Self {
        let scaled = (Decimal::from(self.0) * factor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(scaled.to_u64().unwrap_or(0))
    }
}

impl From<u64> for Rupees {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Rupees {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("₹")?;
        f.write_str(&group_indian(self.0))
    }
}

/// Group digits the Indian way: the last three together, then pairs.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (i + 2 - lead) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Rupees::ZERO.to_string(), "₹0");
        assert_eq!(Rupees::new(500).to_string(), "₹500");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Rupees::new(1_000).to_string(), "₹1,000");
        assert_eq!(Rupees::new(50_000).to_string(), "₹50,000");
        assert_eq!(Rupees::new(100_000).to_string(), "₹1,00,000");
        assert_eq!(Rupees::new(1_234_567).to_string(), "₹12,34,567");
        assert_eq!(Rupees::new(123_456_789).to_string(), "₹12,34,56,789");
    }

    #[test]
    fn test_scale_rounded_half_away_from_zero() {
        let quarter = Decimal::new(25, 2);
        // 1002 * 0.25 = 250.5
        assert_eq!(Rupees::new(1002).scale_rounded(quarter), Rupees::new(251));
        // 1001 * 0.25 = 250.25
        assert_eq!(Rupees::new(1001).scale_rounded(quarter), Rupees::new(250));
    }

    #[test]
    fn test_arithmetic() {
        let total: Rupees = [Rupees::new(1000) * 2, Rupees::new(500) * 1]
            .into_iter()
            .sum();
        assert_eq!(total, Rupees::new(2500));
        assert_eq!(Rupees::new(100).saturating_sub(Rupees::new(250)), Rupees::ZERO);
    }
}
