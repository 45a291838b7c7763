//! Response envelope types shared between the error mapper and the API layer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Standard API error response body.
///
/// Mirrors the success envelope shape so clients always parse
/// `{success, message, timestamp}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false` for errors.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

impl ApiErrorResponse {
    /// Creates an error body with the current timestamp.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
