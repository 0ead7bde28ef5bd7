//! Repository layer for contact persistence

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::models::{NewContact, RecordId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for contact records.
///
/// Implementations handle their own write concurrency; the caller holds no
/// lock across `save`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store name for logging
    fn name(&self) -> &'static str;

    /// Persist a contact. Ownership of the contact moves into the store.
    async fn save(&self, contact: NewContact) -> Result<RecordId, StoreError>;

    /// Liveness probe used by the health endpoint
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// PostgreSQL-backed contact store
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgContactStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn save(&self, contact: NewContact) -> Result<RecordId, StoreError> {
        let row = sqlx::query(
            r#"INSERT INTO contacts (id, name, email, phone, message)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(contact.id.0)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(RecordId(row.get("id")))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
