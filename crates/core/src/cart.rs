//! Shopping cart store.
//!
//! The cart is an ordered list of line items, at most one per product.
//! Totals are derived on every read; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Category, ProductId, Rupees};

/// One cart line: a product snapshot plus a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub price: Rupees,
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            slug: product.slug.clone(),
            name: product.name.clone(),
            category: product.category,
            image: product.image.clone(),
            price: product.price,
            quantity,
        }
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Rupees {
        self.price * self.quantity
    }
}

/// The visitor's cart.
///
/// All operations are total: unknown ids are ignored and nothing fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line for the product has its quantity increased; otherwise
    /// a new line is appended. Adding zero does nothing. Stock is not checked
    /// here.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem::from_product(product, quantity));
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero or less removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Rupees {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities (the header badge value).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}
