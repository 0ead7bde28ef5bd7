//! Gateway types module
//!
//! - [`response`]: JSON bodies returned by the handlers

pub mod response;

pub use response::{CONTACT_CREATED, ErrorBody, HealthBody, MessageBody};
