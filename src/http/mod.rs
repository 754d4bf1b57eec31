//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (listener owned by lifecycle)
//!     → server.rs (Axum router + middleware stack)
//!     → request.rs (add request ID)
//!     → handlers.rs (fixed route table: /hello, /health, 404 fallback)
//!     → response.rs (JSON envelopes)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdLayer, X_REQUEST_ID};
pub use server::build_router;
