//! Session-related types.
//!
//! Types stored in the visitor's session between requests.

use serde::{Deserialize, Serialize};

/// Visual style of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Info,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A transient message shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Session keys for per-visitor state.
pub mod keys {
    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for checkout progress (step, address, payment choice).
    pub const CHECKOUT: &str = "checkout";

    /// Key for the pending toast queue.
    pub const TOASTS: &str = "toasts";

    /// Key for the order confirmation handed to the success page.
    pub const ORDER_CONFIRMATION: &str = "order_confirmation";
}
