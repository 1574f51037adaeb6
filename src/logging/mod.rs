//! Structured logging subsystem.
//!
//! # Data Flow
//! ```text
//! http/handler builds a LogEntry per request
//!     → entry.rs (serialize to one JSON line)
//!     → sink.rs (write the line to stderr)
//!
//! Operational diagnostics (startup, shutdown, encode failures)
//!     → tracing subscriber, initialized in main
//! ```
//!
//! # Design Decisions
//! - Entry keys follow the Cloud Logging structured-line convention
//!   (`severity`, `message`, `logging.googleapis.com/trace`)
//! - Encoding failure never aborts a request; it is reported and the
//!   response is sent regardless
//! - Emission goes through a `LogSink` trait so tests can record lines

pub mod entry;
pub mod sink;

pub use entry::{LogEntry, Severity};
pub use sink::{LogSink, MemorySink, StderrSink};
