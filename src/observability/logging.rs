//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem once, at startup
//! - Respect `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - tracing for structured events throughout the crate
//! - The environment wins over configuration, so operators can raise
//!   verbosity without a restart script change

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the configured level
/// applies to this crate and `tower_http`, with dependencies at `info`.
pub fn init_logging(config: &ObservabilityConfig) {
    let level = config.log_level.as_str();
    let fallback = format!("info,hello_server={level},tower_http={level}");

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
