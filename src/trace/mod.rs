//! Trace correlation subsystem.
//!
//! # Data Flow
//! ```text
//! X-Cloud-Trace-Context header
//!     → context.rs (first slash-delimited segment = trace id)
//!
//! ambient project identity
//!     → identity.rs (env var, then metadata server; failures are silent)
//!
//! both present → "projects/<project-id>/traces/<trace-id>"
//! either absent → no trace field on the log entry
//! ```
//!
//! # Design Decisions
//! - Identity resolution is an injected trait so tests can substitute
//!   fixed or absent identities
//! - Resolution failure never blocks or fails a request

pub mod context;
pub mod identity;

pub use context::{trace_resource, TRACE_CONTEXT_HEADER};
pub use identity::{FixedResolver, MetadataResolver, NoIdentity, ProjectIdentityResolver};
