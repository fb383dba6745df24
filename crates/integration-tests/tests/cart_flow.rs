//! Integration tests for the session cart.
//!
//! Each `TestApp` is one visitor; the session cookie carries their cart.

use axum::http::StatusCode;
use swariva_integration_tests::TestApp;

/// Cart count as rendered by the badge fragment (0 when hidden).
async fn cart_count(app: &mut TestApp) -> u64 {
    let response = app.get("/cart/count").await;
    response
        .body
        .split('>')
        .nth(1)
        .and_then(|rest| rest.split('<').next())
        .and_then(|n| n.trim().parse().ok())
        .unwrap_or(0)
}

// =============================================================================
// Add
// =============================================================================

#[tokio::test]
async fn test_add_redirects_back_and_toasts() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/cart/add", "product_id=6&return_to=%2Fproducts%3Fcategory%3Dearbuds")
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/products?category=earbuds"));

    let page = app.get("/products?category=earbuds").await;
    assert!(page.body.contains("Bassline Sport Earbuds added to cart!"));

    // Toasts are shown once
    let page = app.get("/products?category=earbuds").await;
    assert!(!page.body.contains("added to cart!"));
}

#[tokio::test]
async fn test_adding_same_product_merges_lines() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=6").await;
    app.post_form("/cart/add", "product_id=6").await;
    app.post_form("/cart/add", "product_id=6&quantity=3").await;

    assert_eq!(cart_count(&mut app).await, 5);

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("1 items"));
    assert!(cart.body.contains("₹24,995"));
}

#[tokio::test]
async fn test_quantity_below_one_adds_one() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=5&quantity=-4").await;

    assert_eq!(cart_count(&mut app).await, 1);
}

#[tokio::test]
async fn test_buy_now_goes_to_cart() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/cart/add", "product_id=7&quantity=2&buy_now=1")
        .await;

    assert_eq!(response.location(), Some("/cart"));
    assert_eq!(cart_count(&mut app).await, 2);
}

#[tokio::test]
async fn test_out_of_stock_add_is_refused() {
    let mut app = TestApp::new();
    let response = app.post_form("/cart/add", "product_id=4").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/products/sapphire-tennis-bracelet"));
    assert_eq!(cart_count(&mut app).await, 0);

    let page = app.get("/products/sapphire-tennis-bracelet").await;
    assert!(page.body.contains("Sapphire Tennis Bracelet is out of stock"));
}

#[tokio::test]
async fn test_unknown_product_add_is_not_found() {
    let mut app = TestApp::new();
    let response = app.post_form("/cart/add", "product_id=999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_offsite_return_to_is_ignored() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/cart/add", "product_id=6&return_to=%2F%2Fevil.example")
        .await;

    assert_eq!(response.location(), Some("/products/bassline-sport"));
}

// =============================================================================
// Update / Remove / Clear
// =============================================================================

#[tokio::test]
async fn test_update_sets_quantity() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=6").await;

    let response = app.post_form("/cart/update", "product_id=6&quantity=4").await;
    assert_eq!(response.location(), Some("/cart"));
    assert_eq!(cart_count(&mut app).await, 4);
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=6").await;
    app.post_form("/cart/update", "product_id=6&quantity=0").await;

    assert_eq!(cart_count(&mut app).await, 0);
    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_remove_and_clear() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=5").await;
    app.post_form("/cart/add", "product_id=6").await;

    app.post_form("/cart/remove", "product_id=5").await;
    assert_eq!(cart_count(&mut app).await, 1);

    app.post_form("/cart/clear", "").await;
    assert_eq!(cart_count(&mut app).await, 0);

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Cart cleared"));
}

// =============================================================================
// Summary
// =============================================================================

#[tokio::test]
async fn test_cart_summary_delivery_charge() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=6").await;

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("₹4,999"));
    assert!(cart.body.contains("₹500"));
    assert!(cart.body.contains("₹5,499"));
    assert!(cart.body.contains("more for FREE delivery"));
}

#[tokio::test]
async fn test_cart_summary_free_delivery() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("FREE"));
    assert!(!cart.body.contains("more for FREE delivery"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", "product_id=6").await;
    assert_eq!(cart_count(&mut app).await, 1);

    app.clear_cookies();
    assert_eq!(cart_count(&mut app).await, 0);
}
