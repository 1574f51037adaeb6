//! Structured log entry model and encoding.

use std::fmt;

use serde::{Serialize, Serializer};

/// Cloud Logging severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Default,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

/// A single structured log record, created per request and immediately
/// serialized.
///
/// `trace` and `component` are omitted from the encoded line when absent;
/// `message` and `severity` are always present, with severity substituted
/// by `INFO` when unset.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub message: String,

    #[serde(serialize_with = "severity_or_info")]
    pub severity: Option<Severity>,

    #[serde(rename = "logging.googleapis.com/trace")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

fn severity_or_info<S: Serializer>(
    severity: &Option<Severity>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    severity.unwrap_or(Severity::Info).serialize(serializer)
}

impl LogEntry {
    /// Create an entry with the given message and no severity, trace, or
    /// component.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
            trace: None,
            component: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the trace resource name. Empty values are treated as absent.
    pub fn with_trace(mut self, trace: Option<String>) -> Self {
        self.trace = trace.filter(|t| !t.is_empty());
        self
    }

    /// Set the component tag. Empty values are treated as absent.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        let component = component.into();
        self.component = (!component.is_empty()).then_some(component);
        self
    }

    /// Serialize to a single JSON line.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for LogEntry {
    /// Renders the encoded line. An encoding failure is reported to the
    /// diagnostic stream and renders as empty; it never fails the
    /// formatter or the surrounding request.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(line) => f.write_str(&line),
            Err(err) => {
                tracing::error!(error = %err, "Failed to encode log entry");
                Ok(())
            }
        }
    }
}
