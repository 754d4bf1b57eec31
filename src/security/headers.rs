//! Response header hardening.
//!
//! # Responsibilities
//! - Add security response headers to every response
//! - Mark API responses uncacheable
//! - Strip anything that fingerprints the server stack
//!
//! # Design Decisions
//! - Never emit `Server` or `X-Powered-By`
//! - Header set follows OWASP secure-header guidance

use axum::extract::Request;
use axum::http::header::{
    CACHE_CONTROL, EXPIRES, PRAGMA, REFERRER_POLICY, SERVER, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware adding hardening headers and removing fingerprints.
pub async fn apply_security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));

    headers.remove(SERVER);
    headers.remove("x-powered-by");

    response
}
