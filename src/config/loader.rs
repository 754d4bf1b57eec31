//! Configuration loading from the environment.

use crate::config::schema::AppConfig;
use crate::config::validation::{validate, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// `PORT` was set but is not a usable TCP port.
    InvalidPort { value: String },
    /// Semantic validation rejected the assembled configuration.
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(
                    f,
                    "PORT={value:?} is not a valid TCP port; use a number between 1 and 65535"
                )
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load_from(|var| std::env::var(var).ok())
}

/// Load and validate configuration from an arbitrary variable source.
///
/// Split out from [`load_from_env`] so tests can supply variables
/// without touching the process environment.
pub fn load_from(get: impl Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(value) = get("PORT") {
        config.listener.port = parse_port(value.trim())?;
    }
    if let Some(value) = get("HOST") {
        config.listener.host = value.trim().to_string();
    }
    if let Some(value) = get("LOG_LEVEL") {
        config.observability.log_level = value.trim().to_lowercase();
    }

    validate(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a port value, rejecting anything outside 1-65535.
fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let invalid = || ConfigError::InvalidPort {
        value: value.to_string(),
    };
    let port: u32 = value.parse().map_err(|_| invalid())?;
    if !(1..=65535).contains(&port) {
        return Err(invalid());
    }
    Ok(port as u16)
}
