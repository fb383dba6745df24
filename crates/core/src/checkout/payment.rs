//! Payment methods, delivery charge policy and the amount payable now.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Rupees;

/// Orders strictly above this subtotal ship free.
pub const FREE_DELIVERY_THRESHOLD: Rupees = Rupees::new(50_000);

/// Flat delivery charge below the threshold.
pub const DELIVERY_CHARGE: Rupees = Rupees::new(500);

/// Share of the subtotal collected up front for cash on delivery (25%).
pub const COD_ADVANCE_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// UPI app used for the electronic payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpiProvider {
    #[default]
    GPay,
    PhonePe,
    Paytm,
}

impl UpiProvider {
    pub const ALL: [Self; 3] = [Self::GPay, Self::PhonePe, Self::Paytm];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GPay => "gpay",
            Self::PhonePe => "phonepe",
            Self::Paytm => "paytm",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GPay => "Google Pay",
            Self::PhonePe => "PhonePe",
            Self::Paytm => "Paytm",
        }
    }
}

impl FromStr for UpiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpay" => Ok(Self::GPay),
            "phonepe" => Ok(Self::PhonePe),
            "paytm" => Ok(Self::Paytm),
            _ => Err(format!("invalid UPI provider: {s}")),
        }
    }
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Full settlement now through a UPI app.
    Upi { provider: UpiProvider },
    /// A quarter of the subtotal now, the rest on delivery.
    CashOnDelivery,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Upi {
            provider: UpiProvider::default(),
        }
    }
}

impl PaymentMethod {
    /// Build from the `payment_method` / `upi_provider` form values.
    ///
    /// Unknown providers fall back to the default provider.
    ///
    /// # Errors
    ///
    /// Returns an error for a payment method other than `upi` or `cod`.
    pub fn from_form(method: &str, provider: Option<&str>) -> Result<Self, String> {
        match method {
            "upi" => Ok(Self::Upi {
                provider: provider
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_default(),
            }),
            "cod" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment method: {method}")),
        }
    }

    #[must_use]
    pub const fn is_cash_on_delivery(self) -> bool {
        matches!(self, Self::CashOnDelivery)
    }

    /// Selected UPI provider, if paying by UPI.
    #[must_use]
    pub const fn upi_provider(self) -> Option<UpiProvider> {
        match self {
            Self::Upi { provider } => Some(provider),
            Self::CashOnDelivery => None,
        }
    }

    /// Form value of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upi { .. } => "upi",
            Self::CashOnDelivery => "cod",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upi { provider } => write!(f, "UPI ({})", provider.display_name()),
            Self::CashOnDelivery => f.write_str("Cash on Delivery"),
        }
    }
}

/// Delivery charge for a subtotal: free strictly above the threshold.
#[must_use]
pub fn delivery_charge(subtotal: Rupees) -> Rupees {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        Rupees::ZERO
    } else {
        DELIVERY_CHARGE
    }
}

/// Extra spend that would make delivery free, or `None` if it already is.
///
/// Delivery is free only strictly above [`FREE_DELIVERY_THRESHOLD`], so the
/// gap is `threshold + 1 - subtotal`, not `threshold - subtotal`: a cart at
/// exactly ₹50,000 still pays delivery and is told to add ₹1.
#[must_use]
pub fn amount_for_free_delivery(subtotal: Rupees) -> Option<Rupees> {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        None
    } else {
        Some((FREE_DELIVERY_THRESHOLD + Rupees::new(1)).saturating_sub(subtotal))
    }
}

/// Breakdown of what the visitor pays, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub subtotal: Rupees,
    pub delivery_charge: Rupees,
    /// Subtotal plus delivery.
    pub total: Rupees,
    /// Collected when the order is placed.
    pub payable_now: Rupees,
    /// Collected by the courier; zero for UPI.
    pub due_on_delivery: Rupees,
}

impl PaymentQuote {
    /// Quote a subtotal under a payment method.
    ///
    /// Cash on delivery takes `round(subtotal × 0.25)` now. UPI settles the
    /// full total including delivery.
    #[must_use]
    pub fn new(subtotal: Rupees, method: PaymentMethod) -> Self {
        let delivery_charge = delivery_charge(subtotal);
        let total = subtotal + delivery_charge;
        let payable_now = match method {
            PaymentMethod::CashOnDelivery => subtotal.scale_rounded(COD_ADVANCE_RATE),
            PaymentMethod::Upi { .. } => total,
        };

        Self {
            subtotal,
            delivery_charge,
            total,
            payable_now,
            due_on_delivery: total.saturating_sub(payable_now),
        }
    }

    #[must_use]
    pub const fn is_free_delivery(&self) -> bool {
        self.delivery_charge.is_zero()
    }
}
