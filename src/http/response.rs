//! Response envelopes.
//!
//! # Responsibilities
//! - Fixed success payloads (`/hello`, `/health`)
//! - Client-error envelope (404) echoing path and method
//! - Server-error envelope (500) that never leaks internal detail
//!
//! # Design Decisions
//! - Error bodies carry a stable field set; clients can match on it
//! - Timestamps are RFC 3339 UTC
//! - Stack traces and panic payloads stay in the server log

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Body of the `/hello` response.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Body of the `/health` response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}

/// Envelope for client errors (unmatched path or method).
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub status: u16,
    pub message: &'static str,
    pub path: String,
    pub method: String,
}

/// Envelope for server errors. Carries no internal detail.
#[derive(Debug, Serialize)]
pub struct ServerErrorBody {
    pub status: u16,
    pub message: &'static str,
    pub timestamp: String,
}

/// Build the 404 envelope for an unmatched request.
pub fn not_found(method: &Method, path: &str) -> Response {
    let body = NotFoundBody {
        status: 404,
        message: "Not Found",
        path: path.to_string(),
        method: method.to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Build the generic 500 response. Error detail is logged by the
/// caller, never returned here.
pub fn internal_server_error() -> Response {
    let body = ServerErrorBody {
        status: 500,
        message: "Internal Server Error",
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_has_exact_field_set() {
        let body = NotFoundBody {
            status: 404,
            message: "Not Found",
            path: "/unknown".to_string(),
            method: "GET".to_string(),
        };
        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "status": 404,
                "message": "Not Found",
                "path": "/unknown",
                "method": "GET",
            })
        );
    }

    #[test]
    fn server_error_body_omits_detail() {
        let body = ServerErrorBody {
            status: 500,
            message: "Internal Server Error",
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let value = serde_json::to_value(&body).expect("serialize");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 3);
        assert_eq!(object["status"], 500);
        assert_eq!(object["message"], "Internal Server Error");
    }

    #[test]
    fn not_found_response_is_404() {
        let response = not_found(&Method::POST, "/hello");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_server_error_response_is_500() {
        let response = internal_server_error();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
