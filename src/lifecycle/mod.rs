//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → resolve host → bind listener → serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger received → stop accepting → drain in-flight → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Single owner: the `Lifecycle` holds the listener and the coordinator
//! - Signals only set the token; the run loop acts on it
//! - Draining races natural completion against a hard deadline

pub mod shutdown;
pub mod signals;
pub mod startup;

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinError;

use crate::config::AppConfig;
use crate::http;

pub use shutdown::Shutdown;
pub use startup::StartupError;

/// Lifecycle states, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Stopped,
    Starting,
    Listening,
    Draining,
}

/// Error type for a failed run. Anything here maps to exit code 1.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("server error: {0}")]
    Serve(std::io::Error),

    #[error("grace period of {0:?} elapsed with requests still in flight; terminating")]
    DrainTimeout(Duration),
}

/// Owns the listener and drives the server through its states.
pub struct Lifecycle {
    config: AppConfig,
    shutdown: Shutdown,
    state: State,
}

impl Lifecycle {
    /// Create a lifecycle manager for a validated configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            shutdown: Shutdown::new(),
            state: State::Stopped,
        }
    }

    /// Handle for triggering shutdown from outside the run loop
    /// (tests, embedders). Signal handlers use the same path.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Run to completion: bind, serve, drain, stop.
    ///
    /// Returns `Ok(())` only on a clean drain; every failure path is a
    /// [`LifecycleError`].
    pub async fn run(mut self) -> Result<(), LifecycleError> {
        self.transition(State::Starting);
        let listener = startup::bind(&self.config.listener).await?;
        let router = http::build_router(&self.config);

        signals::spawn_signal_listener(self.shutdown.clone());

        self.serve(listener, router).await
    }

    /// Serve on an already-bound listener. Split from [`Lifecycle::run`]
    /// so tests can inject their own routes and listeners.
    async fn serve(&mut self, listener: TcpListener, router: Router) -> Result<(), LifecycleError> {
        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);

        let mut trigger = self.shutdown.subscribe();
        let drain_signal = {
            let mut rx = self.shutdown.subscribe();
            async move {
                let _ = rx.recv().await;
            }
        };

        let server = axum::serve(listener, router).with_graceful_shutdown(drain_signal);
        let mut serving = tokio::spawn(server.into_future());

        self.transition(State::Listening);

        tokio::select! {
            result = &mut serving => {
                // The serve loop ended without a shutdown trigger.
                self.transition(State::Stopped);
                return flatten(result);
            }
            _ = trigger.recv() => {}
        }

        self.transition(State::Draining);
        let outcome = match tokio::time::timeout(grace, &mut serving).await {
            Ok(result) => flatten(result),
            Err(_) => {
                serving.abort();
                Err(LifecycleError::DrainTimeout(grace))
            }
        };
        self.transition(State::Stopped);
        outcome
    }

    fn transition(&mut self, next: State) {
        tracing::debug!(from = ?self.state, to = ?next, "lifecycle transition");
        self.state = next;
    }
}

fn flatten(result: Result<std::io::Result<()>, JoinError>) -> Result<(), LifecycleError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(LifecycleError::Serve(e)),
        Err(e) => Err(LifecycleError::Serve(std::io::Error::other(e))),
    }
}
