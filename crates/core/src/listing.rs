//! Product listing: category filter followed by a stable sort.

use core::cmp::Ordering;
use core::fmt;

use crate::catalog::{Catalog, Product};
use crate::types::CategoryFilter;

/// Sort order for the products listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Catalog order (no re-ordering).
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Highest rating first.
    Rating,
}

impl SortKey {
    /// All sort keys, in the order the sort selector lists them.
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
    ];

    /// Parse a query-string value, falling back to [`SortKey::Featured`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-low") => Self::PriceLowToHigh,
            Some("price-high") => Self::PriceHighToLow,
            Some("rating") => Self::Rating,
            _ => Self::Featured,
        }
    }

    /// Query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
        }
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceLowToHigh => a.price.cmp(&b.price),
            Self::PriceHighToLow => b.price.cmp(&a.price),
            Self::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter the catalog by category, then stable-sort by `sort`.
///
/// Products that compare equal keep their catalog order.
#[must_use]
pub fn list_products(catalog: &Catalog, filter: CategoryFilter, sort: SortKey) -> Vec<&Product> {
    let mut products = catalog.by_category(filter);
    if sort != SortKey::Featured {
        products.sort_by(|a, b| sort.compare(a, b));
    }
    products
}
