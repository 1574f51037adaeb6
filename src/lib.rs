//! Structured-logging HTTP server for Cloud Run.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request ──▶ http/server ──▶ http/handler
//!                                        │
//!                        ┌───────────────┤
//!                        ▼               ▼
//!                   trace (header    logging (entry
//!                   + project id)    encode + sink)
//!                        │               │
//!                        └───────┬───────┘
//!                                ▼
//!                   one structured line per request
//!
//! SIGINT/SIGTERM ──▶ lifecycle/signals ──▶ lifecycle/shutdown
//!                                        ──▶ http/server drain (bounded)
//! ```
//!
//! Every request, regardless of method or path, produces exactly one
//! Cloud Logging structured entry and a fixed `500` response. The only
//! cross-task coordination is the shutdown handshake.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod logging;
pub mod trace;

pub use config::ServerConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
