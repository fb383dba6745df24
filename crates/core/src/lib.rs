//! Swariva Core - Storefront domain library.
//!
//! This crate holds everything the storefront knows about products, carts
//! and checkout:
//! - `catalog` - The static product list and its lookups
//! - `listing` - Category filtering and sorting for the products page
//! - `cart` - The cart store and its derived totals
//! - `checkout` - Address validation, payment quotes and order placement
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no sessions,
//! no HTTP. The storefront binary owns where state lives; this crate only
//! says how it changes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod listing;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product, Specification};
pub use listing::{SortKey, list_products};
pub use types::*;
