use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entry::application::domain::{entities::Entry, entry_form::EntryForm},
    shared::form::FormErrors,
    topic::application::domain::entities::Topic,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    #[error("Topic not found")]
    TopicNotFound,

    /// Carries the resolved topic so the form can be redisplayed.
    #[error("Entry form is invalid")]
    Validation { topic: Topic, errors: FormErrors },

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Adds entries to a topic. Neither operation takes a requester: the topic
/// owner is not checked.
#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    /// Resolves the topic a blank form is shown for.
    async fn prepare(&self, topic_id: Uuid) -> Result<Topic, CreateEntryError>;

    async fn execute(&self, topic_id: Uuid, form: EntryForm) -> Result<Entry, CreateEntryError>;
}
