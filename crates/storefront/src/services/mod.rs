//! Session-backed services for storefront.
//!
//! # Services
//!
//! - `cart_store` - The visitor's cart, loaded from and saved to the session
//! - `flash` - Toast queue and one-shot hand-offs between requests
//! - `page` - Shared layout data (cart badge, toasts, active nav)

pub mod cart_store;
pub mod flash;
pub mod page;

pub use cart_store::CartStore;
pub use flash::{hand_off, push_toast, take_hand_off, take_toasts};
pub use page::{Nav, PageContext};
