//! Structured request logging
//!
//! Each handler describes its request as a [`RequestLog`] and hands it to the
//! [`RequestObserver`] held in the application state. The default observer
//! writes a `tracing` event; tests can swap in one that records.

use std::fmt;
use std::sync::Mutex;

use tracing::info;
use uuid::Uuid;

/// Characters of the bearer token kept in logs
const TOKEN_PREFIX_LEN: usize = 20;

/// One incoming request, as seen by the log
#[derive(Debug, Clone, PartialEq)]
pub struct RequestLog {
    /// Short identifier for log correlation
    pub trace_id: String,
    /// Logical endpoint name (e.g. `upload_prd`)
    pub endpoint: &'static str,
    /// Redacted bearer token (`<first 20 chars>...`)
    pub token_prefix: Option<String>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    /// Endpoint-specific payload summary
    pub fields: Vec<(&'static str, String)>,
}

impl RequestLog {
    /// Create a new log entry for an endpoint
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(),
            endpoint,
            token_prefix: None,
            user_id: None,
            project_id: None,
            fields: Vec::new(),
        }
    }

    /// Attach the caller's token, keeping only a prefix
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token_prefix = token.map(redact_token);
        self
    }

    pub fn with_scope(mut self, user_id: Option<&str>, project_id: Option<&str>) -> Self {
        self.user_id = user_id.map(str::to_string);
        self.project_id = project_id.map(str::to_string);
        self
    }

    /// Add a payload summary field
    pub fn field(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    /// Look up a summary field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Keep the first characters of a token followed by an ellipsis
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(TOKEN_PREFIX_LEN).collect();
    format!("{prefix}...")
}

/// Receives a [`RequestLog`] for every handled request
pub trait RequestObserver: Send + Sync {
    fn observe(&self, log: &RequestLog);
}

/// Emits each request as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn observe(&self, log: &RequestLog) {
        info!(
            trace_id = %log.trace_id,
            endpoint = log.endpoint,
            token = log.token_prefix.as_deref().unwrap_or("None"),
            user_id = ?log.user_id,
            project_id = ?log.project_id,
            payload = %log.summary(),
            "Request received"
        );
    }
}

/// Keeps every observed request in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    logs: Mutex<Vec<RequestLog>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the requests observed so far
    pub fn logs(&self) -> Vec<RequestLog> {
        self.logs
            .lock()
            .map(|logs| logs.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl RequestObserver for RecordingObserver {
    fn observe(&self, log: &RequestLog) {
        match self.logs.lock() {
            Ok(mut logs) => logs.push(log.clone()),
            Err(poisoned) => poisoned.into_inner().push(log.clone()),
        }
    }
}
