//! Unified error handling
//!
//! Remote failures are reported through [`PredictionError`]; local input
//! problems through [`ValidationError`], which never touches the network.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    /// The request could not be sent or no response arrived (includes timeouts).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Service error ({status}): {message}")]
    Service { status: StatusCode, message: String },

    /// A success response whose body does not match the prediction schema.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl PredictionError {
    /// Build a service error from the `detail` field when present, else from the status line.
    pub fn from_status(status: StatusCode, detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| status_line(status));
        Self::Service { status, message }
    }

    /// Text shown to the user in the failure notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service { message, .. } => message.clone(),
            // Don't leak decoder internals
            Self::Parse(_) => "The prediction service returned an invalid response".to_string(),
            Self::Transport(_) => "Unable to reach the prediction service".to_string(),
        }
    }

    /// Stable tag for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Service { .. } => "service",
            Self::Parse(_) => "parse",
        }
    }
}

impl From<serde_json::Error> for PredictionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// `"<status> <statusText>"`, e.g. `"503 Service Unavailable"`.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name must not be empty")]
    EmptyProjectName,
}
