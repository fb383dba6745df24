//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every mutation redirects back to
//! a page (post/redirect/get) and reports through a toast where the visitor
//! would expect feedback.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use swariva_core::checkout::{PaymentMethod, PaymentQuote, amount_for_free_delivery};
use swariva_core::{CartItem, ProductId, Rupees};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Toast;
use crate::routes::local_redirect_target;
use crate::services::{CartStore, Nav, PageContext, push_toast};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub item: CartItem,
    pub line_total: Rupees,
    /// Quantity posted by the "−" button; 0 removes the line.
    pub decrement_to: i64,
    pub increment_to: i64,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            item: item.clone(),
            line_total: item.line_total(),
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
        }
    }
}

/// Add to cart form data.
///
/// Product cards post no `quantity`; the detail page always does.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: u32,
    pub quantity: Option<i64>,
    pub return_to: Option<String>,
    /// Present when "Buy Now" was pressed.
    pub buy_now: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: u32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: u32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub page: PageContext,
    pub lines: Vec<CartLineView>,
    pub line_count: usize,
    pub quote: PaymentQuote,
    /// Extra spend that unlocks free delivery, while a charge applies.
    pub free_delivery_gap: Option<Rupees>,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Display cart page.
#[instrument(skip(store))]
pub async fn show(store: CartStore) -> Result<CartShowTemplate> {
    let cart = store.cart();
    let subtotal = cart.total();

    Ok(CartShowTemplate {
        lines: cart.items().iter().map(CartLineView::from).collect(),
        line_count: cart.line_count(),
        quote: PaymentQuote::new(subtotal, PaymentMethod::default()),
        free_delivery_gap: amount_for_free_delivery(subtotal),
        page: PageContext::load(&store, Nav::Other).await?,
    })
}

/// Add item to cart.
///
/// Out-of-stock products are refused here, matching the disabled buttons on
/// the product pages. "Buy Now" goes straight to the cart.
#[instrument(skip(state, store))]
pub async fn add(
    State(state): State<AppState>,
    mut store: CartStore,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .by_id(ProductId::new(form.product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let back = local_redirect_target(form.return_to.as_deref())
        .map_or_else(|| format!("/products/{}", product.slug), ToString::to_string);

    if !product.in_stock {
        tracing::info!(product_id = %product.id, "Refused add of out-of-stock product");
        push_toast(
            store.session(),
            Toast::error(format!("{} is out of stock", product.name)),
        )
        .await?;
        return Ok(Redirect::to(&back));
    }

    let quantity = form
        .quantity
        .map(|q| u32::try_from(q.max(1)).unwrap_or(u32::MAX));

    store
        .apply(|cart| cart.add(product, quantity.unwrap_or(1)))
        .await?;

    tracing::info!(
        product_id = %product.id,
        quantity = quantity.unwrap_or(1),
        cart_count = store.cart().count(),
        "Added to cart"
    );

    if form.buy_now.is_some() {
        return Ok(Redirect::to("/cart"));
    }

    let message = match quantity {
        Some(quantity) => format!("{quantity} × {} added to cart!", product.name),
        None => format!("{} added to cart!", product.name),
    };
    push_toast(store.session(), Toast::success(message)).await?;

    Ok(Redirect::to(&back))
}

/// Set a line's quantity; zero or less removes it.
#[instrument(skip(store))]
pub async fn update(mut store: CartStore, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    store
        .apply(|cart| cart.update_quantity(ProductId::new(form.product_id), form.quantity))
        .await?;
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(store))]
pub async fn remove(
    mut store: CartStore,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    store
        .apply(|cart| cart.remove(ProductId::new(form.product_id)))
        .await?;
    Ok(Redirect::to("/cart"))
}

/// Empty the cart.
#[instrument(skip(store))]
pub async fn clear(mut store: CartStore) -> Result<Redirect> {
    store.apply(swariva_core::Cart::clear).await?;
    push_toast(store.session(), Toast::info("Cart cleared")).await?;
    Ok(Redirect::to("/cart"))
}

/// Cart count badge fragment.
#[instrument(skip(store))]
pub async fn count(store: CartStore) -> CartCountTemplate {
    CartCountTemplate {
        count: store.cart().count(),
    }
}
