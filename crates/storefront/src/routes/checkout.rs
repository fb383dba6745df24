//! Checkout route handlers.
//!
//! Checkout progress (step, entered address, payment choice) is kept in the
//! session next to the cart. The cart must be non-empty for any checkout
//! page to render; otherwise the visitor is sent back to `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use swariva_core::Cart;
use swariva_core::checkout::{
    AddressError, AddressField, AddressForm, CheckoutError, CheckoutFlow, CheckoutStep,
    PaymentMethod, PaymentQuote, UpiProvider,
};
use tower_sessions::{Session, session};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{Toast, session_keys};
use crate::routes::cart::CartLineView;
use crate::services::{CartStore, Nav, PageContext, hand_off, push_toast};

/// One input of the address form.
#[derive(Clone)]
pub struct AddressFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub input_type: &'static str,
    pub pattern: Option<&'static str>,
    pub multiline: bool,
}

impl AddressFieldView {
    fn new(field: AddressField, form: &AddressForm, errors: &[AddressError]) -> Self {
        let (input_type, pattern) = match field {
            AddressField::Mobile => ("tel", Some("[0-9]{10}")),
            AddressField::Pincode => ("text", Some("[0-9]{6}")),
            _ => ("text", None),
        };

        Self {
            name: field.as_str(),
            label: field.label(),
            value: form.value(field).to_string(),
            error: errors
                .iter()
                .find(|e| e.field() == field)
                .map(ToString::to_string),
            input_type,
            pattern,
            multiline: field == AddressField::Address,
        }
    }
}

/// A UPI app button.
#[derive(Clone)]
pub struct ProviderOption {
    pub provider: UpiProvider,
    pub selected: bool,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub page: PageContext,
    pub step: CheckoutStep,
    pub on_payment_step: bool,
    pub fields: Vec<AddressFieldView>,
    pub errors: Vec<String>,
    pub payment: PaymentMethod,
    pub providers: Vec<ProviderOption>,
    pub quote: PaymentQuote,
    pub lines: Vec<CartLineView>,
}

impl CheckoutTemplate {
    fn new(page: PageContext, flow: &CheckoutFlow, cart: &Cart, errors: &[AddressError]) -> Self {
        let payment = flow.payment();
        let selected_provider = payment.upi_provider();

        Self {
            page,
            step: flow.step(),
            on_payment_step: flow.step() == CheckoutStep::Payment,
            fields: AddressField::ALL
                .into_iter()
                .map(|field| AddressFieldView::new(field, flow.address(), errors))
                .collect(),
            errors: errors.iter().map(ToString::to_string).collect(),
            payment,
            providers: UpiProvider::ALL
                .into_iter()
                .map(|provider| ProviderOption {
                    provider,
                    selected: selected_provider == Some(provider),
                })
                .collect(),
            quote: flow.quote(cart),
            lines: cart.items().iter().map(CartLineView::from).collect(),
        }
    }
}

/// Payment selection form data.
#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub payment_method: String,
    pub upi_provider: Option<String>,
}

// =============================================================================
// Session Helpers
// =============================================================================

async fn load_flow(session: &Session) -> std::result::Result<CheckoutFlow, session::Error> {
    Ok(session
        .get::<CheckoutFlow>(session_keys::CHECKOUT)
        .await?
        .unwrap_or_default())
}

async fn save_flow(
    session: &Session,
    flow: &CheckoutFlow,
) -> std::result::Result<(), session::Error> {
    session.insert(session_keys::CHECKOUT, flow).await
}

fn back_to_cart() -> Response {
    Redirect::to("/cart").into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the current checkout step.
#[instrument(skip_all)]
pub async fn show(store: CartStore) -> Result<Response> {
    if store.cart().is_empty() {
        store.discard_checkout().await?;
        return Ok(back_to_cart());
    }

    let flow = load_flow(store.session()).await?;
    let page = PageContext::load(&store, Nav::Other).await?;

    Ok(CheckoutTemplate::new(page, &flow, store.cart(), &[]).into_response())
}

/// Submit the delivery address.
///
/// A rejected address re-renders the form with the entered values and the
/// field errors, with status 422.
#[instrument(skip_all)]
pub async fn submit_address(store: CartStore, Form(form): Form<AddressForm>) -> Result<Response> {
    if store.cart().is_empty() {
        return Ok(back_to_cart());
    }

    let mut flow = load_flow(store.session()).await?;
    let outcome = flow.submit_address(form);
    save_flow(store.session(), &flow).await?;

    match outcome {
        Ok(()) => Ok(Redirect::to("/checkout").into_response()),
        Err(errors) => {
            tracing::debug!(error_count = errors.len(), "Address rejected");
            let page = PageContext::load(&store, Nav::Other).await?;
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate::new(page, &flow, store.cart(), &errors),
            )
                .into_response())
        }
    }
}

/// Select UPI (with provider) or cash on delivery.
#[instrument(skip(store))]
pub async fn select_payment(store: CartStore, Form(form): Form<PaymentForm>) -> Result<Response> {
    if store.cart().is_empty() {
        return Ok(back_to_cart());
    }

    let method = PaymentMethod::from_form(&form.payment_method, form.upi_provider.as_deref())
        .map_err(AppError::BadRequest)?;

    let mut flow = load_flow(store.session()).await?;
    flow.select_payment(method);
    save_flow(store.session(), &flow).await?;

    Ok(Redirect::to("/checkout").into_response())
}

/// Return to the address step, keeping what was entered.
#[instrument(skip(store))]
pub async fn back(store: CartStore) -> Result<Response> {
    if store.cart().is_empty() {
        return Ok(back_to_cart());
    }

    let mut flow = load_flow(store.session()).await?;
    flow.back_to_address();
    save_flow(store.session(), &flow).await?;

    Ok(Redirect::to("/checkout").into_response())
}

/// Place the order.
///
/// Empties the cart (which also discards the checkout progress) and hands
/// the confirmation to `/order-success`.
#[instrument(skip(store))]
pub async fn place(mut store: CartStore) -> Result<Redirect> {
    let flow = load_flow(store.session()).await?;
    let outcome = store
        .apply(|cart| flow.place_order(cart, &mut rand::rng()))
        .await?;

    match outcome {
        Ok(confirmation) => {
            hand_off(
                store.session(),
                session_keys::ORDER_CONFIRMATION,
                &confirmation,
            )
            .await?;

            tracing::info!(
                order_id = %confirmation.order_id,
                amount_paid = confirmation.amount_paid.get(),
                "Order placed"
            );
            let data = [("order_id", confirmation.order_id.as_str())];
            add_breadcrumb("checkout", "Order placed", Some(data.as_slice()));

            Ok(Redirect::to("/order-success"))
        }
        Err((_, CheckoutError::EmptyCart)) => Ok(Redirect::to("/cart")),
        Err((_, CheckoutError::NotReadyToPlace)) => {
            push_toast(
                store.session(),
                Toast::error("Please confirm your delivery address first"),
            )
            .await?;
            Ok(Redirect::to("/checkout"))
        }
    }
}
