//! Trace-propagation header parsing.

/// Request header carrying the trace context, format
/// `<trace-id>/<span-id>;o=<options>`.
pub const TRACE_CONTEXT_HEADER: &str = "X-Cloud-Trace-Context";

/// Extract the trace id: everything up to the first `/`.
///
/// The header is split on `/` only; a value without a slash contributes
/// as-is. Empty values yield nothing.
pub fn trace_id(header: &str) -> Option<&str> {
    header.split('/').next().filter(|id| !id.is_empty())
}

/// Build the trace resource name `projects/<project-id>/traces/<trace-id>`
/// from a raw header value, if the header carries a trace id.
pub fn trace_resource(project_id: &str, header: &str) -> Option<String> {
    trace_id(header).map(|id| format!("projects/{project_id}/traces/{id}"))
}
