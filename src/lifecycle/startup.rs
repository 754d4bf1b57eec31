//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the configured host
//! - Bind the listener and report the bound address
//! - Classify bind failures into actionable categories
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and never retried
//! - Each failure category carries its own remediation hint

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::{lookup_host, TcpListener};

use crate::config::ListenerConfig;

/// Classified bind failure. Fatal; the process exits non-zero.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("host {host:?} could not be resolved; set HOST to a hostname or address this machine knows")]
    HostUnresolvable {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("address {addr} is already in use; stop the other process or pick a different PORT")]
    AddrInUse {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("permission denied binding {addr}; ports below 1024 need elevated privileges")]
    PermissionDenied {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Resolve and bind the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    if config.port < 1024 {
        tracing::warn!(port = config.port, "port is in the privileged range");
    }

    let host = config.host.as_str();
    let addr = lookup_host((host, config.port))
        .await
        .map_err(|source| StartupError::HostUnresolvable {
            host: host.to_string(),
            source,
        })?
        .next()
        .ok_or_else(|| StartupError::HostUnresolvable {
            host: host.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "resolver returned no addresses"),
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| classify(addr, source))?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| classify(addr, source))?;

    tracing::info!(address = %local_addr, "listener bound");

    Ok(listener)
}

fn classify(addr: SocketAddr, source: io::Error) -> StartupError {
    match source.kind() {
        io::ErrorKind::AddrInUse => StartupError::AddrInUse { addr, source },
        io::ErrorKind::PermissionDenied => StartupError::PermissionDenied { addr, source },
        _ => StartupError::Bind { addr, source },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_loopback_on_ephemeral_port() {
        let config = ListenerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        };
        // Port 0 is rejected by config validation before it gets here,
        // but the bind itself is a convenient ephemeral-port fixture.
        let listener = bind(&config).await.expect("bind");
        assert_eq!(
            listener.local_addr().expect("addr").ip().to_string(),
            "127.0.0.1"
        );
    }

    #[tokio::test]
    async fn second_bind_is_classified_address_in_use() {
        let first = TcpListener::bind(("127.0.0.1", 0)).await.expect("first bind");
        let taken = first.local_addr().expect("addr").port();

        let config = ListenerConfig {
            port: taken,
            host: "127.0.0.1".to_string(),
        };
        let err = bind(&config).await.expect_err("bind should fail");
        assert!(matches!(err, StartupError::AddrInUse { .. }));
        assert!(err.to_string().contains("already in use"));
    }

    #[tokio::test]
    async fn unresolvable_host_is_classified() {
        let config = ListenerConfig {
            port: 3000,
            host: "host.invalid".to_string(),
        };
        let err = bind(&config).await.expect_err("resolution should fail");
        assert!(matches!(err, StartupError::HostUnresolvable { .. }));
    }

    #[test]
    fn classification_covers_permission_denied() {
        let addr: SocketAddr = "127.0.0.1:80".parse().expect("addr");
        let err = classify(
            addr,
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, StartupError::PermissionDenied { .. }));
        assert!(err.to_string().contains("elevated privileges"));
    }
}
