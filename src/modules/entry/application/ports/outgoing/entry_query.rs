use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::domain::entities::Entry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EntryQuery: Send + Sync {
    /// Newest first.
    async fn entries_for_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError>;

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError>;
}
