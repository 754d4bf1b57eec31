//! A hello-world HTTP service with a production-shaped lifecycle.
//!
//! Exposes `GET /hello` and `GET /health`, answers everything else with a
//! JSON 404 envelope, and turns handler panics into a generic JSON 500.
//! The lifecycle manager owns the listener: validated environment
//! configuration, classified bind errors, signal-driven graceful shutdown
//! with a bounded drain period, and deterministic exit codes.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::AppConfig;
pub use lifecycle::{Lifecycle, LifecycleError, Shutdown};
