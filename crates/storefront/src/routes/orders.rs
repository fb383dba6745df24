//! Order confirmation route handler.

use askama::Template;
use askama_web::WebTemplate;
use swariva_core::checkout::{OrderConfirmation, estimated_delivery};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session_keys;
use crate::services::{CartStore, Nav, PageContext, take_hand_off};

/// Order success page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_success.html")]
pub struct OrderSuccessTemplate {
    pub page: PageContext,
    pub confirmation: OrderConfirmation,
    /// e.g. "21 October 2026"
    pub estimated_delivery: String,
}

/// Display the order confirmation.
///
/// The confirmation is taken from the session, so a reload (or a direct
/// visit) shows the `N/A` / `₹0` placeholder instead.
#[instrument(skip_all)]
pub async fn success(store: CartStore) -> Result<OrderSuccessTemplate> {
    let confirmation = take_hand_off::<OrderConfirmation>(
        store.session(),
        session_keys::ORDER_CONFIRMATION,
    )
    .await?
    .unwrap_or_else(OrderConfirmation::unavailable);

    let today = chrono::Local::now().date_naive();

    Ok(OrderSuccessTemplate {
        page: PageContext::load(&store, Nav::Other).await?,
        confirmation,
        estimated_delivery: estimated_delivery(today).format("%-d %B %Y").to_string(),
    })
}
