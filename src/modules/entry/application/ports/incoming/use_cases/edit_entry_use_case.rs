use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Requester,
    entry::application::domain::{entities::Entry, entry_form::EntryForm},
    shared::form::FormErrors,
    topic::application::domain::entities::Topic,
};

#[derive(Debug, Clone)]
pub struct EntryEditContext {
    pub entry: Entry,
    pub topic: Topic,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditEntryError {
    /// Also returned when the requester may not touch the parent topic.
    #[error("Entry not found")]
    EntryNotFound,

    #[error("Entry form is invalid")]
    Validation {
        context: EntryEditContext,
        errors: FormErrors,
    },

    #[error("Failed to fetch entry: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditEntryUseCase: Send + Sync {
    async fn prepare(
        &self,
        requester: Requester,
        entry_id: Uuid,
    ) -> Result<EntryEditContext, EditEntryError>;

    /// Replaces the entry text; returns the updated entry.
    async fn execute(
        &self,
        requester: Requester,
        entry_id: Uuid,
        form: EntryForm,
    ) -> Result<Entry, EditEntryError>;
}
