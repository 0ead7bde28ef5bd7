use std::sync::Arc;

use tracing::{error, info, warn};

use crate::notify::{DeliveryReceipt, MailIdentity, Notifier, contact_notification};

use super::error::ContactError;
use super::models::{ContactSubmission, RecordId};
use super::repository::{RecordStore, StoreError};

/// Outcome of a fully successful submission
#[derive(Debug, Clone)]
pub struct Submitted {
    pub id: RecordId,
    pub receipt: DeliveryReceipt,
}

/// Contact submission flow: validate → persist → notify.
///
/// Each stage is terminal on failure. A notification failure does not undo
/// the stored record.
pub struct ContactService {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    identity: MailIdentity,
}

impl ContactService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
        identity: MailIdentity,
    ) -> Self {
        Self {
            store,
            notifier,
            identity,
        }
    }

    pub async fn submit(&self, submission: ContactSubmission) -> Result<Submitted, ContactError> {
        // 1. Validate
        let contact = submission
            .into_new_contact(RecordId::generate())
            .inspect_err(|e| warn!("Rejected contact submission: {}", e))?;

        // Compose before the contact moves into the store
        let message = contact_notification(&self.identity, &contact);

        // 2. Persist
        let id = self.store.save(contact).await.map_err(|e| {
            error!(store = self.store.name(), "Error saving contact message: {}", e);
            ContactError::Persistence(e)
        })?;
        info!(%id, "Contact saved");

        // 3. Notify (once, no retry)
        let receipt = self.notifier.send(&message).await.map_err(|e| {
            error!(
                notifier = self.notifier.name(),
                %id,
                "Error sending email, contact kept: {}", e
            );
            ContactError::Notification(e)
        })?;
        info!(%id, "Email sent: {}", receipt.response);

        Ok(Submitted { id, receipt })
    }

    /// Store liveness for the health endpoint
    pub async fn store_health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
