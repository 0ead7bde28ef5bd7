//! Contact submission error types.
//!
//! Each variant maps to one HTTP status and one generic, client-safe message.
//! The internal cause is only ever logged.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::gateway::types::ErrorBody;
use crate::notify::NotifyError;

use super::repository::StoreError;

pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing or empty fields: [{}]", .fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Failed to save contact: {0}")]
    Persistence(#[from] StoreError),

    #[error("Failed to send notification: {0}")]
    Notification(#[from] NotifyError),
}

impl ContactError {
    /// Get HTTP status code.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) | Self::Notification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation { .. } => FIELDS_REQUIRED,
            Self::InvalidBody(_) => INVALID_BODY,
            Self::Persistence(_) | Self::Notification(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.public_message());
        (self.http_status(), Json(body)).into_response()
    }
}
