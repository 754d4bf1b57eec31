//! Route handlers.
//!
//! Every handler is a pure function of the request; there is no shared
//! state and no ordering between requests.

use axum::http::{Method, Uri};
use axum::response::{Json, Response};

use crate::http::response::{self, Greeting, HealthStatus};

/// `GET /hello` returns the fixed greeting.
pub async fn hello() -> Json<Greeting> {
    tracing::debug!("serving greeting");
    Json(Greeting {
        message: "Hello world",
    })
}

/// `GET /health` answers liveness probes from orchestration and load
/// balancers.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for any unmatched path or method.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::warn!(method = %method, path = %uri.path(), "no route matched");
    response::not_found(&method, uri.path())
}
