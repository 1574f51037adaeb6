//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger shutdown coordinator
//!
//! Shutdown (shutdown.rs):
//!     trigger → server stops accepting → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - One coordinator created at startup, shared with the signal task and
//!   the server; tests trigger it directly without OS signals
//! - Drain has a timeout: forced close after the grace period

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::spawn_signal_listener;
