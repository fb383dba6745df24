//! Integration test harness for the Swariva storefront.
//!
//! Drives the real router in-process, carrying the session cookie from one
//! request to the next the way a browser would.
//!
//! ```rust,ignore
//! let mut app = TestApp::new();
//! let response = app.post_form("/cart/add", "product_id=6").await;
//! assert_eq!(response.status, StatusCode::SEE_OTHER);
//! ```

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use swariva_core::Catalog;
use swariva_storefront::config::StorefrontConfig;
use swariva_storefront::middleware::SESSION_COOKIE_NAME;
use swariva_storefront::state::AppState;
use tower::ServiceExt;

/// Storefront configuration for tests: defaults plus the crate's own assets.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static")),
        ..StorefrontConfig::default()
    }
}

/// A captured response with its body read to a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// One visitor browsing the storefront.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Storefront with the built-in catalog and a fresh visitor.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(test_config(), Catalog::builtin());
        Self {
            router: swariva_storefront::app(state),
            cookie: None,
        }
    }

    /// Forget the session cookie, as a new browser would.
    pub fn clear_cookies(&mut self) {
        self.cookie = None;
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::get(path);
        self.send(request, Body::empty()).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&mut self, path: &str, form: &str) -> TestResponse {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(request, Body::from(form.to_string())).await
    }

    async fn send(&mut self, mut request: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let request = request.body(body).expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        self.remember_session_cookie(&headers);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn remember_session_cookie(&mut self, headers: &HeaderMap) {
        let prefix = format!("{SESSION_COOKIE_NAME}=");
        let session_cookie = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with(&prefix));

        if let Some(pair) = session_cookie {
            self.cookie = Some(pair.to_string());
        }
    }
}
