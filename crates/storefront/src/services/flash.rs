//! Toasts and one-shot hand-offs.
//!
//! Both are values parked in the session by one request and removed by the
//! next request that reads them, so each is observed exactly once.

use serde::{Serialize, de::DeserializeOwned};
use tower_sessions::{Session, session};

use crate::models::{Toast, session_keys};

/// Queue a toast for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn push_toast(session: &Session, toast: Toast) -> Result<(), session::Error> {
    let mut toasts: Vec<Toast> = session
        .get(session_keys::TOASTS)
        .await?
        .unwrap_or_default();
    toasts.push(toast);
    session.insert(session_keys::TOASTS, toasts).await
}

/// Drain the toast queue.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn take_toasts(session: &Session) -> Result<Vec<Toast>, session::Error> {
    Ok(session
        .remove::<Vec<Toast>>(session_keys::TOASTS)
        .await?
        .unwrap_or_default())
}

/// Park a value for exactly one later read.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized into the session.
pub async fn hand_off<T: Serialize + Sync>(
    session: &Session,
    key: &str,
    value: &T,
) -> Result<(), session::Error> {
    session.insert(key, value).await
}

/// Take a handed-off value, leaving nothing behind.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn take_hand_off<T: DeserializeOwned>(
    session: &Session,
    key: &str,
) -> Result<Option<T>, session::Error> {
    session.remove(key).await
}
