use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outbound payload: a fixed request URL plus the user's input text.
///
/// Constructed fresh per submission and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    pub url: String,
    pub value: String,
}

/// The backend's current answer and completion percentage.
///
/// Overwritten wholesale on each response; there are no merge semantics.
/// Missing fields decode to defaults, so a sparse or empty body is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PredictionItem {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub progress: u32,
}

/// Failure at the POST boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
    #[error("{code} - {reason}")]
    HttpStatus { code: u16, reason: String },
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    InvalidBody(String),
}

impl PostError {
    /// Reduces the error to the single human-readable string shown in the
    /// UI: the transport message when there is one, `"<status> - <reason>"`
    /// for HTTP failures, and a generic fallback otherwise.
    pub fn display_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            "Server error".to_string()
        } else {
            text
        }
    }
}

/// Completion notification for a submitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Completed {
        result: Result<PredictionItem, PostError>,
    },
}
