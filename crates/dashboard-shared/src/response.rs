//! Standardized API error shape.

use serde::{Deserialize, Serialize};

/// Wire error body: `{"error": "...", "details": "..."}`.
///
/// `error` is a short, stable description of the failure kind; `details`
/// carries an optional human-readable elaboration and never raw internals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
