//! Data shared by every page rendered through `base.html`.

use swariva_core::{Category, CategoryFilter};

use crate::models::Toast;
use crate::services::{CartStore, flash};

/// Header navigation entry to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Products(CategoryFilter),
    Other,
}

impl Nav {
    /// Whether the "All Products" link is the active one.
    #[must_use]
    pub fn is_all_products(self) -> bool {
        self == Self::Products(CategoryFilter::All)
    }

    #[must_use]
    pub fn is_home(self) -> bool {
        self == Self::Home
    }

    /// Whether the category link for `slug` is the active one.
    #[must_use]
    pub fn is_category(self, slug: &str) -> bool {
        matches!(self, Self::Products(CategoryFilter::Only(c)) if c.as_str() == slug)
    }
}

/// Layout data: cart badge, pending toasts and the active nav link.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub cart_count: u64,
    pub toasts: Vec<Toast>,
    pub nav: Nav,
    pub categories: [Category; 3],
}

impl PageContext {
    /// Build the layout data, draining pending toasts.
    ///
    /// # Errors
    ///
    /// Returns an error if the toast queue cannot be read.
    pub async fn load(
        store: &CartStore,
        nav: Nav,
    ) -> Result<Self, tower_sessions::session::Error> {
        let toasts = flash::take_toasts(store.session()).await?;
        Ok(Self {
            cart_count: store.cart().count(),
            toasts,
            nav,
            categories: Category::ALL,
        })
    }
}
