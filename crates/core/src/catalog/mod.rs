//! Static product catalog and its lookup functions.
//!
//! All queries are pure reads over an immutable product list. There is no
//! pagination and no search ranking.

mod data;
pub mod product;

pub use data::builtin_products;
pub use product::{Product, Specification};

use crate::types::{Category, CategoryFilter, ProductId};

/// An immutable, ordered list of products.
///
/// Catalog order is the "featured" listing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog over the given products, keeping their order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog shipped with the storefront.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_products())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Look up a product by its id.
    #[must_use]
    pub fn by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing the category filter, in catalog order.
    #[must_use]
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// Products flagged as featured, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Number of products in a category.
    #[must_use]
    pub fn category_count(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}
