//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntactic parsing)
//! - Validate value shapes (host non-blank, origins well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use axum::http::HeaderValue;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `HOST` is empty or blank.
    HostEmpty,
    /// `HOST` contains whitespace and can never resolve.
    HostWhitespace(String),
    /// `LOG_LEVEL` is not a known level name.
    InvalidLogLevel(String),
    /// A CORS origin is not a valid header value.
    InvalidOrigin(String),
    /// A zero drain ceiling would make every shutdown a forced one.
    ZeroGracePeriod,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::HostEmpty => {
                write!(f, "HOST must not be empty; use \"localhost\" or \"0.0.0.0\"")
            }
            ValidationError::HostWhitespace(host) => {
                write!(f, "HOST {host:?} contains whitespace; use a hostname or IP address")
            }
            ValidationError::InvalidLogLevel(level) => {
                write!(f, "LOG_LEVEL {level:?} is not one of trace, debug, info, warn, error")
            }
            ValidationError::InvalidOrigin(origin) => {
                write!(f, "CORS origin {origin:?} is not a valid header value")
            }
            ValidationError::ZeroGracePeriod => {
                write!(f, "shutdown grace period must be at least one second")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check the assembled configuration, collecting every problem found.
pub fn validate(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let host = config.listener.host.as_str();
    if host.trim().is_empty() {
        errors.push(ValidationError::HostEmpty);
    } else if host.chars().any(char::is_whitespace) {
        errors.push(ValidationError::HostWhitespace(host.to_string()));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    for origin in &config.cors.allowed_origins {
        if HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }

    if config.shutdown.grace_period_secs == 0 {
        errors.push(ValidationError::ZeroGracePeriod);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn all_problems_are_reported_together() {
        let mut config = AppConfig::default();
        config.listener.host = String::new();
        config.shutdown.grace_period_secs = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::HostEmpty));
        assert!(errors.contains(&ValidationError::ZeroGracePeriod));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("loud".to_string())));
    }

    #[test]
    fn host_with_inner_whitespace_is_rejected() {
        let mut config = AppConfig::default();
        config.listener.host = "local host".to_string();
        let errors = validate(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::HostWhitespace(_)));
    }

    #[test]
    fn malformed_origin_is_rejected() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins.push("bad\norigin".to_string());
        let errors = validate(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidOrigin(_)));
    }
}
