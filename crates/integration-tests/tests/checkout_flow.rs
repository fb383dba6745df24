//! Integration tests for the two-step checkout and the order confirmation.

use axum::http::StatusCode;
use swariva_integration_tests::TestApp;

const VALID_ADDRESS: &str = "name=Ananya+Rao&mobile=9876543210\
    &address=14+MG+Road%2C+Indiranagar&city=Bengaluru&state=Karnataka&pincode=560038";

async fn visitor_with_cart(product_id: u32) -> TestApp {
    let mut app = TestApp::new();
    let response = app
        .post_form("/cart/add", &format!("product_id={product_id}"))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    app
}

// =============================================================================
// Guards
// =============================================================================

#[tokio::test]
async fn test_checkout_with_empty_cart_redirects_to_cart() {
    let mut app = TestApp::new();
    let response = app.get("/checkout").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));
}

#[tokio::test]
async fn test_place_with_empty_cart_redirects_to_cart() {
    let mut app = TestApp::new();
    let response = app.post_form("/checkout/place", "").await;

    assert_eq!(response.location(), Some("/cart"));
}

#[tokio::test]
async fn test_place_before_address_is_refused() {
    let mut app = visitor_with_cart(6).await;
    let response = app.post_form("/checkout/place", "").await;

    assert_eq!(response.location(), Some("/checkout"));

    let page = app.get("/checkout").await;
    assert!(page.body.contains("Please confirm your delivery address first"));
    assert!(page.body.contains("Continue to Payment"));
}

// =============================================================================
// Address Step
// =============================================================================

#[tokio::test]
async fn test_checkout_starts_at_address() {
    let mut app = visitor_with_cart(6).await;
    let response = app.get("/checkout").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Delivery Address"));
    assert!(response.body.contains("Continue to Payment"));
}

#[tokio::test]
async fn test_invalid_address_keeps_entered_values() {
    let mut app = visitor_with_cart(6).await;
    let response = app
        .post_form("/checkout/address", "name=Ananya+Rao&mobile=12345&pincode=5600")
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("value=\"Ananya Rao\""));
    assert!(response.body.contains("value=\"12345\""));
    assert!(response.body.contains("Mobile Number must be exactly 10 digits"));
    assert!(response.body.contains("Pincode must be exactly 6 digits"));
    assert!(response.body.contains("City is required"));
    assert!(!response.body.contains("Select Payment Method"));
}

#[tokio::test]
async fn test_valid_address_moves_to_payment() {
    let mut app = visitor_with_cart(6).await;
    let response = app.post_form("/checkout/address", VALID_ADDRESS).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/checkout"));

    let page = app.get("/checkout").await;
    assert!(page.body.contains("Select Payment Method"));
    assert!(page.body.contains("Bengaluru"));
    assert!(page.body.contains("Place Order - ₹5,499"));
}

#[tokio::test]
async fn test_back_returns_to_filled_address_form() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;
    app.post_form("/checkout/back", "").await;

    let page = app.get("/checkout").await;
    assert!(page.body.contains("Continue to Payment"));
    assert!(page.body.contains("value=\"9876543210\""));
}

// =============================================================================
// Payment Step
// =============================================================================

#[tokio::test]
async fn test_cash_on_delivery_quote() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;
    let response = app.post_form("/checkout/payment", "payment_method=cod").await;
    assert_eq!(response.location(), Some("/checkout"));

    let page = app.get("/checkout").await;
    // 25% of ₹4,999, rounded; the rest plus delivery on delivery
    assert!(page.body.contains("Payable Now (25%)"));
    assert!(page.body.contains("Place Order - ₹1,250"));
    assert!(page.body.contains("₹4,249"));
}

#[tokio::test]
async fn test_upi_provider_selection() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;
    app.post_form("/checkout/payment", "payment_method=upi&upi_provider=phonepe")
        .await;

    let page = app.get("/checkout").await;
    let selected = page
        .body
        .split("upi-provider selected\">")
        .nth(1)
        .map(str::trim_start);
    assert!(selected.is_some_and(|rest| rest.starts_with("PhonePe")));
}

#[tokio::test]
async fn test_payment_and_back_with_empty_cart_redirect_to_cart() {
    let mut app = TestApp::new();

    let response = app.post_form("/checkout/payment", "payment_method=cod").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));

    let response = app.post_form("/checkout/back", "").await;
    assert_eq!(response.location(), Some("/cart"));

    // Nothing was recorded: a later checkout still starts at the address step
    app.post_form("/cart/add", "product_id=6").await;
    let page = app.get("/checkout").await;
    assert!(page.body.contains("Continue to Payment"));
    assert!(!page.body.contains("Payable Now (25%)"));
}

#[tokio::test]
async fn test_unknown_payment_method_is_bad_request() {
    let mut app = visitor_with_cart(6).await;
    let response = app
        .post_form("/checkout/payment", "payment_method=barter")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Placing the Order
// =============================================================================

#[tokio::test]
async fn test_place_order_empties_cart_and_confirms_once() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;

    let response = app.post_form("/checkout/place", "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/order-success"));

    let success = app.get("/order-success").await;
    assert_eq!(success.status, StatusCode::OK);
    assert!(success.body.contains("Order Placed Successfully!"));
    assert!(success.body.contains("SWR"));
    assert!(success.body.contains("₹5,499"));

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Your cart is empty"));

    // The confirmation is handed over once
    let again = app.get("/order-success").await;
    assert!(again.body.contains("N/A"));
    assert!(again.body.contains("₹0"));
}

#[tokio::test]
async fn test_cash_on_delivery_order_records_advance() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;
    app.post_form("/checkout/payment", "payment_method=cod").await;
    app.post_form("/checkout/place", "").await;

    let success = app.get("/order-success").await;
    assert!(success.body.contains("₹1,250"));
}

#[tokio::test]
async fn test_checkout_restarts_after_order() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;
    app.post_form("/checkout/place", "").await;

    app.post_form("/cart/add", "product_id=5").await;
    let page = app.get("/checkout").await;
    assert!(page.body.contains("Continue to Payment"));
    assert!(!page.body.contains("value=\"Ananya Rao\""));
}

#[tokio::test]
async fn test_clearing_cart_restarts_checkout() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;
    app.post_form("/checkout/payment", "payment_method=cod").await;

    app.post_form("/cart/clear", "").await;
    app.post_form("/cart/add", "product_id=5").await;

    let page = app.get("/checkout").await;
    assert!(page.body.contains("Continue to Payment"));
    assert!(!page.body.contains("Select Payment Method"));
    assert!(!page.body.contains("value=\"Ananya Rao\""));
}

#[tokio::test]
async fn test_removing_last_line_restarts_checkout() {
    let mut app = visitor_with_cart(6).await;
    app.post_form("/checkout/address", VALID_ADDRESS).await;

    app.post_form("/cart/update", "product_id=6&quantity=0").await;
    app.post_form("/cart/add", "product_id=6").await;

    let page = app.get("/checkout").await;
    assert!(page.body.contains("Continue to Payment"));
    assert!(!page.body.contains("value=\"Ananya Rao\""));
}

#[tokio::test]
async fn test_order_success_without_order() {
    let mut app = TestApp::new();
    let response = app.get("/order-success").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("N/A"));
    assert!(response.body.contains("₹0"));
}
