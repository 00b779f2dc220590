use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entry::application::{
        domain::{entities::Entry, entry_form::EntryForm},
        ports::{
            incoming::use_cases::{CreateEntryError, CreateEntryUseCase},
            outgoing::{CreateEntryData, EntryRepository},
        },
    },
    topic::application::{domain::entities::Topic, ports::outgoing::TopicQuery},
};

#[derive(Debug, Clone)]
pub struct CreateEntryService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    topic_query: Q,
    repository: R,
}

impl<Q, R> CreateEntryService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(topic_query: Q, repository: R) -> Self {
        Self {
            topic_query,
            repository,
        }
    }

    async fn resolve_topic(&self, topic_id: Uuid) -> Result<Topic, CreateEntryError> {
        self.topic_query
            .find_by_id(topic_id)
            .await
            .map_err(|e| CreateEntryError::QueryFailed(e.to_string()))?
            .ok_or(CreateEntryError::TopicNotFound)
    }
}

#[async_trait]
impl<Q, R> CreateEntryUseCase for CreateEntryService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn prepare(&self, topic_id: Uuid) -> Result<Topic, CreateEntryError> {
        self.resolve_topic(topic_id).await
    }

    async fn execute(&self, topic_id: Uuid, form: EntryForm) -> Result<Entry, CreateEntryError> {
        let topic = self.resolve_topic(topic_id).await?;

        let text = match form.validate() {
            Ok(text) => text,
            Err(errors) => return Err(CreateEntryError::Validation { topic, errors }),
        };

        self.repository
            .create_entry(CreateEntryData {
                topic_id: topic.id,
                text,
            })
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))
    }
}
