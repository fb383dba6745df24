//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use swariva_core::{Category, CategoryFilter, Product, SortKey, list_products};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::{CartStore, Nav, PageContext};
use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Detail page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    /// Index of the gallery image shown large.
    pub image: Option<usize>,
}

/// Sidebar category entry with its product count.
#[derive(Clone)]
pub struct CategoryOption {
    pub category: Category,
    pub count: usize,
    pub selected: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub page: PageContext,
    pub products: Vec<Product>,
    pub filter: CategoryFilter,
    pub sort: SortKey,
    pub sort_options: [SortKey; 4],
    pub categories: Vec<CategoryOption>,
    pub total_count: usize,
    /// Current listing URL, so "Add to Cart" comes back to the same view.
    pub return_to: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub page: PageContext,
    pub product: Product,
    pub selected_image: usize,
    pub main_image: String,
    pub return_to: String,
}

/// Shown for an unknown slug.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub page: PageContext,
}

/// Display product listing page.
#[instrument(skip(state, store))]
pub async fn index(
    State(state): State<AppState>,
    store: CartStore,
    Query(query): Query<ListingQuery>,
    uri: Uri,
) -> Result<ProductsIndexTemplate> {
    let catalog = state.catalog();
    let filter = CategoryFilter::parse(query.category.as_deref());
    let sort = SortKey::parse(query.sort.as_deref());

    let products = list_products(catalog, filter, sort)
        .into_iter()
        .cloned()
        .collect();

    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryOption {
            category,
            count: catalog.category_count(category),
            selected: filter == CategoryFilter::Only(category),
        })
        .collect();

    let return_to = uri
        .path_and_query()
        .map_or_else(|| "/products".to_string(), ToString::to_string);

    Ok(ProductsIndexTemplate {
        page: PageContext::load(&store, Nav::Products(filter)).await?,
        products,
        filter,
        sort,
        sort_options: SortKey::ALL,
        categories,
        total_count: catalog.len(),
        return_to,
    })
}

/// Display product detail page, or the not-found view.
#[instrument(skip(state, store))]
pub async fn show(
    State(state): State<AppState>,
    store: CartStore,
    Path(slug): Path<String>,
    Query(query): Query<GalleryQuery>,
) -> Result<Response> {
    let page = PageContext::load(&store, Nav::Other).await?;

    let Some(product) = state.catalog().by_slug(&slug) else {
        tracing::debug!(slug = %slug, "Unknown product slug");
        return Ok((StatusCode::NOT_FOUND, ProductNotFoundTemplate { page }).into_response());
    };

    // Out-of-range picks fall back to the first image.
    let selected_image = query
        .image
        .filter(|&index| index < product.images.len())
        .unwrap_or(0);
    let main_image = product
        .images
        .get(selected_image)
        .unwrap_or(&product.image)
        .clone();

    Ok(ProductShowTemplate {
        page,
        selected_image,
        main_image,
        return_to: format!("/products/{}", product.slug),
        product: product.clone(),
    }
    .into_response())
}
