//! Contact submission module
//!
//! Validate → persist → notify, with PostgreSQL storage behind the
//! [`RecordStore`] seam.

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::ContactError;
pub use models::{ContactRecord, ContactSubmission, NewContact, RecordId};
pub use repository::{PgContactStore, RecordStore, StoreError};
pub use service::{ContactService, Submitted};
