//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (PORT, HOST, LOG_LEVEL)
//!     → loader.rs (read & parse)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared with the lifecycle and router builders
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an empty environment still boots
//! - Validation separates syntactic (parse) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::AppConfig;
pub use schema::ListenerConfig;
pub use schema::ShutdownConfig;
pub use validation::ValidationError;
