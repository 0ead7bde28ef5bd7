//! Contact Gateway - contact-form backend
//!
//! Accepts a form submission, stores it in PostgreSQL and emails a
//! notification to the site owner.
//!
//! # Modules
//!
//! - [`contact`] - Submission model, validation, `RecordStore` and the submit flow
//! - [`notify`] - `Notifier` seam, email templates, mail relay client
//! - [`gateway`] - axum router, handlers, OpenAPI document
//! - [`db`] - PostgreSQL pool and schema
//! - [`config`] - YAML + environment configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod contact;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod notify;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError};
pub use contact::{
    ContactError, ContactRecord, ContactService, ContactSubmission, NewContact, PgContactStore,
    RecordId, RecordStore, StoreError, Submitted,
};
pub use db::Database;
pub use notify::{DeliveryReceipt, EmailMessage, MailIdentity, Notifier, NotifyError, SmtpMailer};
