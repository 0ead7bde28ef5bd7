//! API response bodies
//!
//! - `MessageBody`: `{ "message": ... }` on success
//! - `ErrorBody`: `{ "error": ... }` on failure, never carrying internal detail

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const CONTACT_CREATED: &str = "Message sent successfully and notification email sent!";

/// Success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Message sent successfully and notification email sent!")]
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "All fields are required")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    #[schema(example = "ok")]
    pub status: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shapes() {
        assert_eq!(
            serde_json::to_value(ErrorBody::new("All fields are required")).unwrap(),
            serde_json::json!({ "error": "All fields are required" })
        );
        assert_eq!(
            serde_json::to_value(MessageBody::new(CONTACT_CREATED)).unwrap(),
            serde_json::json!({ "message": CONTACT_CREATED })
        );
    }
}
