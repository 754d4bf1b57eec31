//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; fields, not format strings
//! - The request ID stamped by the HTTP layer flows through all events

pub mod logging;

pub use logging::init_logging;
