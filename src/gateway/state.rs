use std::sync::Arc;

use crate::contact::ContactService;

/// Gateway application state (shared across requests)
#[derive(Clone)]
pub struct AppState {
    /// Submission flow with its injected store and notifier
    pub contacts: Arc<ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<ContactService>) -> Self {
        Self { contacts }
    }
}
