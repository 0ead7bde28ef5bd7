//! Email notification
//!
//! [`Notifier`] is the dispatch seam; [`SmtpMailer`] delivers over SMTP
//! with the mail-account credentials. Templates live in [`template`].

pub mod smtp_mailer;
pub mod template;

pub use smtp_mailer::SmtpMailer;
pub use template::{SUBJECT, contact_notification};

use async_trait::async_trait;
use serde::Serialize;

use crate::config::MailConfig;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Mail transport unavailable: {0}")]
    Unavailable(String),
}

/// Sender/recipient pair used for every notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailIdentity {
    pub from: String,
    pub to: String,
}

impl MailIdentity {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_config(config: &MailConfig) -> Self {
        Self::new(config.user.clone(), config.recipient())
    }
}

/// A composed email: recipient, subject, plain-text and HTML bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Transport acknowledgement, logged on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub response: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Transport name for logging
    fn name(&self) -> &'static str;

    /// Dispatch one message. Called at most once per submission, never retried.
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, NotifyError>;
}
