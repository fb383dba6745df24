//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use swariva_core::{Category, Product};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::{CartStore, Nav, PageContext};
use crate::state::AppState;

/// A "Shop by Category" tile.
#[derive(Clone)]
pub struct CategoryTile {
    pub category: Category,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Tiles in display order.
fn category_tiles() -> Vec<CategoryTile> {
    vec![
        CategoryTile {
            category: Category::Jewelry,
            title: "Jewelry",
            blurb: "Timeless elegance in gold, diamonds, and precious gems",
        },
        CategoryTile {
            category: Category::Earbuds,
            title: "Earbuds",
            blurb: "Premium audio experience with cutting-edge technology",
        },
        CategoryTile {
            category: Category::Gadgets,
            title: "Smart Gadgets",
            blurb: "Innovative devices to enhance your daily life",
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub categories: Vec<CategoryTile>,
    pub featured: Vec<Product>,
    /// Where "Add to Cart" on a featured card sends the visitor back to.
    pub return_to: &'static str,
}

/// Display the home page.
#[instrument(skip(state, store))]
pub async fn home(State(state): State<AppState>, store: CartStore) -> Result<HomeTemplate> {
    let featured = state.catalog().featured().into_iter().cloned().collect();

    Ok(HomeTemplate {
        page: PageContext::load(&store, Nav::Home).await?,
        categories: category_tiles(),
        featured,
        return_to: "/",
    })
}
