//! Service entry point.
//!
//! Wires the subsystems in order: configuration, logging, lifecycle.
//! Exit code 0 means a clean drain; every failure path exits 1.

use std::process::ExitCode;

use hello_server::config;
use hello_server::lifecycle::Lifecycle;
use hello_server::observability;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet; this must still reach the operator.
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    observability::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.listener.host,
        port = config.listener.port,
        grace_period_secs = config.shutdown.grace_period_secs,
        "hello-server starting"
    );

    match Lifecycle::new(config).run().await {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "server terminated");
            ExitCode::FAILURE
        }
    }
}
