//! Security subsystem.
//!
//! # Design Decisions
//! - Response-side hardening only; request validation lives with the
//!   handlers
//! - No response ever identifies the framework or runtime

pub mod headers;

pub use headers::apply_security_headers;
