//! Wire format of error responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error body returned by every failing endpoint.
///
/// `error` is a stable machine-readable code, `message` is for humans.
/// Neither carries sensitive detail; server-side causes stay in the logs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a named detail value
    pub fn with_detail(mut self, key: impl ToString, value: Value) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }
}
