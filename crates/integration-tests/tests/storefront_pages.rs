//! Integration tests for the browsing pages: home, listing, product detail.

use axum::http::StatusCode;
use swariva_integration_tests::TestApp;

// =============================================================================
// Infrastructure
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_pages_carry_security_headers_and_request_id() {
    let mut app = TestApp::new();
    let response = app.get("/").await;

    assert!(response.headers.contains_key("content-security-policy"));
    assert!(response.headers.contains_key("x-content-type-options"));
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let mut app = TestApp::new();

    let css = app.get("/static/css/main.css").await;
    assert_eq!(css.status, StatusCode::OK);

    let js = app.get("/static/js/image-fallback.js").await;
    assert_eq!(js.status, StatusCode::OK);
    assert!(js.body.contains("data-fallback"));
}

// =============================================================================
// Home
// =============================================================================

#[tokio::test]
async fn test_home_lists_categories_and_featured_products() {
    let mut app = TestApp::new();
    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Shop by Category"));
    assert!(response.body.contains("Featured Products"));
    assert!(response.body.contains("/products?category=earbuds"));
    // Nothing in the cart yet, so no badge
    assert!(!response.body.contains("id=\"cart-count\""));
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_listing_shows_every_product() {
    let mut app = TestApp::new();
    let response = app.get("/products").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Showing <strong>10</strong> products"));
}

#[tokio::test]
async fn test_listing_filters_by_category() {
    let mut app = TestApp::new();
    let response = app.get("/products?category=gadgets").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Pulse Smartwatch X2"));
    assert!(response.body.contains("Nova Smart Ring"));
    assert!(!response.body.contains("Bassline Sport Earbuds"));
    assert!(response.body.contains("Showing <strong>3</strong> products"));
}

#[tokio::test]
async fn test_listing_unknown_category_shows_everything() {
    let mut app = TestApp::new();
    let response = app.get("/products?category=furniture").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Showing <strong>10</strong> products"));
}

#[tokio::test]
async fn test_listing_sorts_by_price() {
    let mut app = TestApp::new();
    let response = app.get("/products?category=earbuds&sort=price-low").await;

    let cheapest = response.body.find("Bassline Sport Earbuds");
    let priciest = response.body.find("Studio Lux Wireless Earbuds");
    assert!(cheapest.is_some() && priciest.is_some());
    assert!(cheapest < priciest);
}

// =============================================================================
// Product Detail
// =============================================================================

#[tokio::test]
async fn test_product_detail() {
    let mut app = TestApp::new();
    let response = app.get("/products/aurasound-pro-anc").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("AuraSound Pro ANC Earbuds"));
    assert!(response.body.contains("₹14,999"));
    assert!(response.body.contains("25% OFF"));
    assert!(response.body.contains("Buy Now"));
    assert!(response.body.contains("Specifications"));
}

#[tokio::test]
async fn test_out_of_stock_product_disables_buttons() {
    let mut app = TestApp::new();
    let response = app.get("/products/sapphire-tennis-bracelet").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Out of Stock"));
    assert!(response.body.contains("disabled"));
}

#[tokio::test]
async fn test_gallery_out_of_range_image_falls_back_to_first() {
    let mut app = TestApp::new();
    let response = app.get("/products/nova-smart-ring?image=42").await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut app = TestApp::new();
    let response = app.get("/products/unicorn-tiara").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Product not found"));
    assert!(response.body.contains("Back to Products"));
}

#[tokio::test]
async fn test_login_stub() {
    let mut app = TestApp::new();
    let response = app.get("/login").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Continue as Guest"));
}
