//! Request handling.
//!
//! # Responsibilities
//! - Resolve the trace resource for the inbound request
//! - Emit exactly one structured log entry per request
//! - Respond with the fixed error status and body
//!
//! # Design Decisions
//! - Every method and path is handled identically; there is no routing
//! - The 500 response is the observable contract of this service and is
//!   returned regardless of internal state

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::http::server::AppState;
use crate::logging::{LogEntry, Severity};
use crate::trace::{trace_resource, TRACE_CONTEXT_HEADER};

/// Log message attached to every request entry.
pub const DISPLAY_MESSAGE: &str = "This is the default display field.";

/// Component tag attached to every request entry.
pub const COMPONENT: &str = "arbitrary-property";

/// Fixed response body.
pub const ERROR_BODY: &str = "Something went wrong";

/// Catch-all request handler.
pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let trace = match state.identity.project_id().await {
        Some(project_id) => headers
            .get(TRACE_CONTEXT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| trace_resource(&project_id, header)),
        None => None,
    };

    let entry = LogEntry::new(DISPLAY_MESSAGE)
        .with_severity(Severity::Notice)
        .with_component(COMPONENT)
        .with_trace(trace);
    // Display reports an encoding failure itself and renders empty.
    state.sink.write_line(&entry.to_string());

    (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY)
}
