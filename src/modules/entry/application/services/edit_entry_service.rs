use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Requester,
    entry::application::{
        domain::{entities::Entry, entry_form::EntryForm},
        ports::{
            incoming::use_cases::{EditEntryError, EditEntryUseCase, EntryEditContext},
            outgoing::{EntryQuery, EntryRepository, EntryRepositoryError},
        },
    },
    topic::application::{domain::policies::ensure_topic_access, ports::outgoing::TopicQuery},
};

#[derive(Debug, Clone)]
pub struct EditEntryService<E, Q, R>
where
    E: EntryQuery + Send + Sync,
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    entry_query: E,
    topic_query: Q,
    repository: R,
}

impl<E, Q, R> EditEntryService<E, Q, R>
where
    E: EntryQuery + Send + Sync,
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(entry_query: E, topic_query: Q, repository: R) -> Self {
        Self {
            entry_query,
            topic_query,
            repository,
        }
    }

    /// Entry, then parent topic, then the ownership guard.
    async fn load(
        &self,
        requester: &Requester,
        entry_id: Uuid,
    ) -> Result<EntryEditContext, EditEntryError> {
        let entry = self
            .entry_query
            .find_by_id(entry_id)
            .await
            .map_err(|e| EditEntryError::QueryFailed(e.to_string()))?
            .ok_or(EditEntryError::EntryNotFound)?;

        let topic = self
            .topic_query
            .find_by_id(entry.topic_id)
            .await
            .map_err(|e| EditEntryError::QueryFailed(e.to_string()))?
            .ok_or(EditEntryError::EntryNotFound)?;

        ensure_topic_access(requester, &topic).map_err(|_| EditEntryError::EntryNotFound)?;

        Ok(EntryEditContext { entry, topic })
    }
}

#[async_trait]
impl<E, Q, R> EditEntryUseCase for EditEntryService<E, Q, R>
where
    E: EntryQuery + Send + Sync,
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn prepare(
        &self,
        requester: Requester,
        entry_id: Uuid,
    ) -> Result<EntryEditContext, EditEntryError> {
        self.load(&requester, entry_id).await
    }

    async fn execute(
        &self,
        requester: Requester,
        entry_id: Uuid,
        form: EntryForm,
    ) -> Result<Entry, EditEntryError> {
        let context = self.load(&requester, entry_id).await?;

        let text = match form.validate() {
            Ok(text) => text,
            Err(errors) => return Err(EditEntryError::Validation { context, errors }),
        };

        self.repository
            .update_text(context.entry.id, text)
            .await
            .map_err(|e| match e {
                EntryRepositoryError::EntryNotFound => EditEntryError::EntryNotFound,
                other => EditEntryError::RepositoryError(other.to_string()),
            })
    }
}
