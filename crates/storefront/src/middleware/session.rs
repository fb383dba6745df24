//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Carts and checkout
//! progress live only as long as the server process and the visitor's
//! inactivity window.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "swariva_session";

/// Create the session layer with an in-memory store.
///
/// # Arguments
///
/// * `config` - Storefront configuration (cookie security and idle expiry)
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::minutes(config.session_idle_minutes),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
