//! Router assembly.
//!
//! # Responsibilities
//! - Build the Axum router with the fixed route table
//! - Wire up the middleware stack (request ID, tracing, security
//!   headers, panic guard, timeout, CORS)
//!
//! # Design Decisions
//! - An unmatched method on a known path falls through to the same 404
//!   as an unmatched path
//! - Panics become the generic 500 envelope; detail goes to the log only

use std::any::Any;
use std::time::Duration;

use axum::http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::http::response;
use crate::security;

/// Build the service router from validated configuration.
///
/// Layer order, outermost first: request ID, trace, security headers,
/// panic guard, timeout, CORS. The panic guard sits inside the header
/// middleware so even a 500 leaves hardened.
pub fn build_router(config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/hello", get(handlers::hello).fallback(handlers::not_found))
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(CatchPanicLayer::custom(handle_panic));

    if config.security.enable_headers {
        router = router.layer(middleware::from_fn(security::apply_security_headers));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    // Invalid origins were rejected during config validation.
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(86_400))
}

/// Translate a handler panic into the generic 500 envelope. The panic
/// payload is logged here and goes no further.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked while serving a request");
    response::internal_server_error()
}
