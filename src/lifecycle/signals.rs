//! OS signal handling.
//!
//! # Responsibilities
//! - Wait on SIGINT and SIGTERM
//! - Translate the first signal into a shutdown trigger
//!
//! # Design Decisions
//! - Signals only set the token; the lifecycle run loop acts on it
//! - Signals received while draining are ignored; the drain deadline
//!   already bounds how long the process can linger

use super::shutdown::Shutdown;

/// Spawn the task that converts termination signals into a shutdown
/// trigger.
pub fn spawn_signal_listener(shutdown: Shutdown) {
    tokio::spawn(async move {
        wait_for_termination().await;
        shutdown.trigger();
    });
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn wait_for_termination() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => tracing::info!("interrupt received; shutting down"),
        _ = terminate => tracing::info!("terminate received; shutting down"),
    }
}
