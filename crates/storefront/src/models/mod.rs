//! Session-stored models for storefront.

pub mod session;

pub use session::{Toast, ToastKind, keys as session_keys};
