//! Common API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error response body returned by all API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_code_and_message() {
        let body = ErrorBody::new("invalid_credentials", "Invalid email or password");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "invalid_credentials");
        assert_eq!(json["message"], "Invalid email or password");
    }
}
