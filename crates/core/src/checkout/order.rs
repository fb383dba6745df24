//! Order identifiers and the confirmation handed to the success page.

use core::fmt;

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::types::Rupees;

const ORDER_ID_PREFIX: &str = "SWR";
const ORDER_ID_SUFFIX_LEN: usize = 7;
const ORDER_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Days from placement to the estimated delivery date.
pub const DELIVERY_ESTIMATE_DAYS: u64 = 5;

/// Order identifier shown to the customer, e.g. `SWR7K2Q9XA`.
///
/// Generated locally from random characters. Nothing checks for collisions;
/// this stands in for an identifier a real order service would issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a new identifier: the `SWR` prefix plus 7 random `[0-9A-Z]`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(ORDER_ID_PREFIX.len() + ORDER_ID_SUFFIX_LEN);
        id.push_str(ORDER_ID_PREFIX);
        for _ in 0..ORDER_ID_SUFFIX_LEN {
            if let Some(&c) = ORDER_ID_ALPHABET.choose(rng) {
                id.push(char::from(c));
            }
        }
        Self(id)
    }

    /// Placeholder shown when no order was handed off.
    #[must_use]
    pub fn unavailable() -> Self {
        Self("N/A".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a placed order, read once by the confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    /// Amount collected at placement (the advance for cash on delivery).
    pub amount_paid: Rupees,
}

impl OrderConfirmation {
    /// Fallback for a confirmation page reached without placing an order.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            order_id: OrderId::unavailable(),
            amount_paid: Rupees::ZERO,
        }
    }
}

/// Estimated delivery date for an order placed on `placed_on`.
#[must_use]
pub fn estimated_delivery(placed_on: NaiveDate) -> NaiveDate {
    placed_on
        .checked_add_days(Days::new(DELIVERY_ESTIMATE_DAYS))
        .unwrap_or(placed_on)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = OrderId::generate(&mut rng);
            let suffix = id.as_str().strip_prefix("SWR").unwrap_or_default();
            assert_eq!(suffix.len(), 7, "{id}");
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "{id}"
            );
        }
    }

    #[test]
    fn test_generation_depends_on_rng() {
        let a = OrderId::generate(&mut StdRng::seed_from_u64(1));
        let b = OrderId::generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unavailable_confirmation() {
        let confirmation = OrderConfirmation::unavailable();
        assert_eq!(confirmation.order_id.as_str(), "N/A");
        assert_eq!(confirmation.amount_paid, Rupees::ZERO);
    }

    #[test]
    fn test_estimated_delivery_is_five_days_out() {
        let placed = NaiveDate::from_ymd_opt(2026, 12, 29).unwrap_or_default();
        let expected = NaiveDate::from_ymd_opt(2027, 1, 3).unwrap_or_default();
        assert_eq!(estimated_delivery(placed), expected);
    }
}
