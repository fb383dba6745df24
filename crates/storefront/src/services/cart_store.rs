//! Session-backed cart store.
//!
//! Handlers take a [`CartStore`] as an extractor and dispatch cart operations
//! through [`CartStore::apply`], which writes the cart back to the session.

use axum::{extract::FromRequestParts, http::request::Parts};
use swariva_core::Cart;
use tower_sessions::{Session, session};

use crate::error::AppError;
use crate::models::session_keys;

/// The visitor's cart, bound to their session.
///
/// Each request loads the cart and writes it back whole, so of two
/// overlapping mutations in one session (a double-submitted form) the last
/// write wins.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut store: CartStore) -> Result<Redirect, AppError> {
///     store.apply(|cart| cart.clear()).await?;
///     Ok(Redirect::to("/cart"))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CartStore {
    session: Session,
    cart: Cart,
}

impl CartStore {
    /// Load the cart from the session, starting empty if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn load(session: Session) -> Result<Self, session::Error> {
        let cart = session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default();
        Ok(Self { session, cart })
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The session the cart is stored in.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run a cart operation and persist the result.
    ///
    /// Checkout progress is discarded once the cart is empty, so the next
    /// checkout starts from the address step.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be written to the session.
    pub async fn apply<R>(&mut self, op: impl FnOnce(&mut Cart) -> R) -> Result<R, session::Error> {
        let result = op(&mut self.cart);
        self.save().await?;
        if self.cart.is_empty() {
            self.discard_checkout().await?;
        }
        Ok(result)
    }

    /// Drop any checkout progress held in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn discard_checkout(&self) -> Result<(), session::Error> {
        self.session
            .remove_value(session_keys::CHECKOUT)
            .await
            .map(|_| ())
    }

    /// Write the current cart back to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be serialized into the session.
    pub async fn save(&self) -> Result<(), session::Error> {
        self.session.insert(session_keys::CART, &self.cart).await
    }
}

impl<S> FromRequestParts<S> for CartStore
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer is not installed".to_string()))?;

        Ok(Self::load(session).await?)
    }
}
