//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all routing, drain on shutdown)
//!     → handler.rs (trace resolution, one log entry, fixed 500)
//! ```

pub mod handler;
pub mod server;

pub use server::{bind, router, AppState, HttpServer, ServerError};
