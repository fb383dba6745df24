//! Login page.
//!
//! Accounts are not implemented; the page explains that and offers guest
//! checkout.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::{CartStore, Nav, PageContext};

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
}

/// Display login page.
#[instrument(skip_all)]
pub async fn login_page(store: CartStore) -> Result<LoginTemplate> {
    Ok(LoginTemplate {
        page: PageContext::load(&store, Nav::Other).await?,
    })
}
