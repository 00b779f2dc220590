use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::domain::entities::Entry;

#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Entry not found")]
    EntryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError>;

    /// Overwrites `text` only.
    async fn update_text(&self, entry_id: Uuid, text: String)
        -> Result<Entry, EntryRepositoryError>;
}
