//! Server configuration.
//!
//! # Responsibilities
//! - Resolve the listening port from the environment
//! - Carry the shutdown grace period
//!
//! # Design Decisions
//! - Environment-only: no config files, no CLI flags
//! - Grace period is a fixed constant in production; the field exists so
//!   tests can shorten it without touching process state

use std::env;
use std::time::Duration;

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: &str = "8080";

/// Time allowed for in-flight requests to finish after a shutdown signal.
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind, as a string (taken verbatim from `PORT`).
    pub port: String,

    /// Bounded drain window during shutdown.
    pub grace_period: Duration,
}

impl ServerConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
        Self {
            port,
            grace_period: SHUTDOWN_GRACE_PERIOD,
        }
    }

    /// Address to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            grace_period: SHUTDOWN_GRACE_PERIOD,
        }
    }
}
