//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all handler
//! - Serve connections on a bound listener
//! - Drain in-flight requests on shutdown, bounded by the grace period
//!
//! # Design Decisions
//! - Serving runs on a spawned task so the drain wait can be bounded;
//!   when the grace period expires the task is aborted, force-closing
//!   remaining connections
//! - A drain timeout is logged but not an error: the process still
//!   exits 0 once it has served traffic

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::any;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::handler;
use crate::lifecycle::Shutdown;
use crate::logging::LogSink;
use crate::trace::ProjectIdentityResolver;

/// State injected into the request handler.
#[derive(Clone)]
pub struct AppState {
    /// Ambient project identity source.
    pub identity: Arc<dyn ProjectIdentityResolver>,

    /// Destination for per-request log lines.
    pub sink: Arc<dyn LogSink>,
}

/// Error type for the server run loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Bind the configured listen address.
///
/// Startup cannot proceed without the listener, so failure is logged here
/// and propagated for a non-zero exit. The "listening" line is only
/// logged once `run` starts serving, never on this path.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let address = config.bind_address();
    match TcpListener::bind(&address).await {
        Ok(listener) => Ok(listener),
        Err(err) => {
            tracing::error!(address = %address, error = %err, "Failed to bind listener");
            Err(ServerError::Io(err))
        }
    }
}

/// Build the application router: every method on every path goes to the
/// same handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{*path}", any(handler::handle))
        .route("/", any(handler::handle))
        .with_state(state)
}

/// HTTP server bound to one listener for its entire lifetime.
pub struct HttpServer {
    router: Router,
    grace_period: Duration,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            router: router(state),
            grace_period: config.grace_period,
        }
    }

    /// Serve until the shutdown coordinator fires, then drain.
    ///
    /// Requests in flight when the signal arrives get up to the grace
    /// period to complete. Requests still running after that are
    /// abandoned and their connections closed.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Listening for connections");

        let mut drain_rx = shutdown.subscribe();
        let mut trigger_rx = shutdown.subscribe();

        let serve = axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = drain_rx.recv().await;
            });
        let mut serve_task = tokio::spawn(serve.into_future());

        tokio::select! {
            // Listener loop ended on its own: an I/O error, since the
            // drain future has not resolved yet.
            result = &mut serve_task => {
                return result.map_err(ServerError::Task)?.map_err(ServerError::Io);
            }
            _ = trigger_rx.recv() => {}
        }

        tracing::info!(
            grace_secs = self.grace_period.as_secs(),
            "Draining in-flight requests"
        );
        match tokio::time::timeout(self.grace_period, &mut serve_task).await {
            Ok(result) => {
                result.map_err(ServerError::Task)?.map_err(ServerError::Io)?;
                tracing::info!("HTTP server stopped");
            }
            Err(_) => {
                serve_task.abort();
                tracing::error!(
                    grace_secs = self.grace_period.as_secs(),
                    "Drain grace period exceeded, force-closing remaining connections"
                );
            }
        }
        Ok(())
    }
}
