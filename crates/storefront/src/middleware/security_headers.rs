//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Pages are server-rendered with no inline script, so the policy only has to
//! open `img-src` for the placeholder image host used when a product photo
//! fails to load.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Host serving fallback product images.
pub const PLACEHOLDER_IMAGE_HOST: &str = "https://via.placeholder.com";

const CSP: &str = "default-src 'none'; \
                   script-src 'self'; \
                   style-src 'self'; \
                   font-src 'self'; \
                   img-src 'self' https://via.placeholder.com; \
                   connect-src 'self'; \
                   frame-src 'none'; \
                   object-src 'none'; \
                   base-uri 'self'; \
                   form-action 'self'; \
                   frame-ancestors 'none'";

const PERMISSIONS_POLICY: &str = "accelerometer=(), \
                                  camera=(), \
                                  display-capture=(), \
                                  geolocation=(), \
                                  gyroscope=(), \
                                  microphone=(), \
                                  payment=(), \
                                  usb=()";

/// Add security headers to all responses.
///
/// Page responses are also marked `no-store`: they embed the visitor's cart.
/// Static assets under `/static` keep their default caching.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let is_static = request.uri().path().starts_with("/static/");

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(CSP));
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );

    if !is_static {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );
    // The placeholder host sends no CORP header; require-corp would block it.
    headers.insert(
        HeaderName::from_static("cross-origin-embedder-policy"),
        HeaderValue::from_static("credentialless"),
    );

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request, middleware, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "page" }))
            .route("/static/css/main.css", get(|| async { "css" }))
            .layer(middleware::from_fn(security_headers_middleware))
    }

    async fn get_headers(uri: &str) -> axum::http::HeaderMap {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .headers()
            .clone()
    }

    #[test]
    fn test_csp_allows_placeholder_host() {
        assert!(CSP.contains(PLACEHOLDER_IMAGE_HOST));
        assert!(CSP.contains("script-src 'self'"));
        assert!(!CSP.contains("unsafe-inline"));
    }

    #[tokio::test]
    async fn test_page_headers() {
        let headers = get_headers("/").await;
        assert_eq!(headers.get(X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(headers.get(CACHE_CONTROL).unwrap(), "no-store, max-age=0");
        assert!(headers.get(CONTENT_SECURITY_POLICY).is_some());
    }

    #[tokio::test]
    async fn test_static_assets_stay_cacheable() {
        let headers = get_headers("/static/css/main.css").await;
        assert!(headers.get(CACHE_CONTROL).is_none());
        assert_eq!(headers.get(X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    }
}
