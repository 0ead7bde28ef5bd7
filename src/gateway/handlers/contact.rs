//! Contact submission handler

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
};

use crate::contact::{ContactError, ContactSubmission};

use super::super::state::AppState;
use super::super::types::{CONTACT_CREATED, ErrorBody, MessageBody};

/// Submit the contact form
///
/// Validates the four fields, stores the contact, then emails a notification.
/// A 500 after a successful save means the contact is stored but no email went out.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactSubmission,
    responses(
        (status = 201, description = "Contact stored and notification sent", body = MessageBody),
        (status = 400, description = "A required field is missing or empty, or the JSON is malformed", body = ErrorBody),
        (status = 500, description = "Storage or notification failed", body = ErrorBody)
    ),
    tag = "Contact"
)]
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageBody>), ContactError> {
    let submission = parse_submission(&headers, &body)?;

    state.contacts.submit(submission).await?;

    Ok((StatusCode::CREATED, Json(MessageBody::new(CONTACT_CREATED))))
}

/// Decode the form body.
///
/// A body that is not declared as JSON, or is empty, carries no fields and
/// falls through to the required-field check. Only broken JSON is a body error.
fn parse_submission(headers: &HeaderMap, body: &[u8]) -> Result<ContactSubmission, ContactError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactSubmission::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected contact body: {}", e);
        ContactError::InvalidBody(e.to_string())
    })
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
