//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (?category=, ?sort=)
//! GET  /products/{slug}        - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Set a line's quantity (<= 0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Current checkout step
//! POST /checkout/address       - Submit the delivery address
//! POST /checkout/payment       - Select a payment method
//! POST /checkout/back          - Return to the address step
//! POST /checkout/place         - Place the order
//! GET  /order-success          - Order confirmation (read once)
//!
//! # Auth
//! GET  /login                  - Login page (stub)
//! ```
//!
//! Every mutating route answers with a 303 redirect.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/address", post(checkout::submit_address))
        .route("/payment", post(checkout::select_payment))
        .route("/back", post(checkout::back))
        .route("/place", post(checkout::place))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/order-success", get(orders::success))
        .route("/login", get(auth::login_page))
}

/// Accept a post-redirect target only if it stays on this site.
///
/// Allows absolute paths (`/products?category=earbuds`) and rejects
/// protocol-relative (`//evil.example`) or absolute URLs.
#[must_use]
pub fn local_redirect_target(target: Option<&str>) -> Option<&str> {
    target.filter(|t| t.starts_with('/') && !t.starts_with("//") && !t.contains('\\'))
}
