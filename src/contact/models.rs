//! Data models for contact submissions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::error::ContactError;

/// Identifier assigned to a stored contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Inbound contact-form payload.
///
/// Every field is optional at the wire level so that a missing key, a
/// `null` and an empty string are all reported as the same validation error.
/// Numbers and booleans are stored as their text; `0` and `false` count as
/// missing, like an empty string.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ContactSubmission {
    #[schema(example = "Ann")]
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[schema(example = "ann@x.com")]
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[schema(example = "555")]
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    #[schema(example = "hi")]
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub message: Option<String>,
}

/// Accept any JSON scalar as field text. Arrays and objects are rejected.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(number_text(&number)),
        Some(Value::Array(_)) => Err(D::Error::custom("expected text, found an array")),
        Some(Value::Object(_)) => Err(D::Error::custom("expected text, found an object")),
    }
}

// Integral floats print without a fraction ("5.0" -> "5")
fn number_text(number: &serde_json::Number) -> Option<String> {
    match number.as_f64() {
        Some(n) if n == 0.0 => None,
        Some(n) if number.is_f64() && n.fract() == 0.0 && n.abs() < 1e15 => {
            Some(format!("{}", n as i64))
        }
        _ => Some(number.to_string()),
    }
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            message: Some(message.into()),
        }
    }

    /// Check all four fields and turn the submission into a storable contact.
    ///
    /// No format validation is applied: any non-empty text is accepted.
    pub fn into_new_contact(self, id: RecordId) -> Result<NewContact, ContactError> {
        if let Err(errors) = self.validate() {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            return Err(ContactError::Validation { fields });
        }

        match (self.name, self.email, self.phone, self.message) {
            (Some(name), Some(email), Some(phone), Some(message)) => Ok(NewContact {
                id,
                name,
                email,
                phone,
                message,
            }),
            _ => Err(ContactError::Validation { fields: Vec::new() }),
        }
    }
}

/// A validated contact, ready to be handed over to a `RecordStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A persisted contact, timestamps assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Stamp a new contact with the persistence time
    pub fn stamped(contact: NewContact, at: DateTime<Utc>) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            message: contact.message,
            created_at: at,
            updated_at: at,
        }
    }
}
