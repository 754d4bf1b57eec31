//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use hello_server::config::AppConfig;
use hello_server::lifecycle::Lifecycle;
use hello_server::Shutdown;

/// Start the full server on a fixed local port and return its address
/// plus a handle for stopping it.
pub async fn start_server(port: u16) -> (SocketAddr, Shutdown) {
    let mut config = AppConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = port;

    let lifecycle = Lifecycle::new(config);
    let shutdown = lifecycle.shutdown_handle();

    tokio::spawn(async move {
        let _ = lifecycle.run().await;
    });

    // Give the listener a moment to come up.
    tokio::time::sleep(Duration::from_millis(200)).await;

    (SocketAddr::from(([127, 0, 0, 1], port)), shutdown)
}

/// Non-pooled client so each test observes fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .expect("client should build")
}
