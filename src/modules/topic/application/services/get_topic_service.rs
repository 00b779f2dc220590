use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Requester,
    entry::application::ports::outgoing::EntryQuery,
    topic::application::{
        domain::policies::ensure_topic_access,
        ports::incoming::use_cases::{GetTopicError, GetTopicUseCase, TopicDetail},
        ports::outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    topic_query: Q,
    entry_query: E,
}

impl<Q, E> GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    pub fn new(topic_query: Q, entry_query: E) -> Self {
        Self {
            topic_query,
            entry_query,
        }
    }
}

#[async_trait]
impl<Q, E> GetTopicUseCase for GetTopicService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        topic_id: Uuid,
    ) -> Result<TopicDetail, GetTopicError> {
        let topic = self
            .topic_query
            .find_by_id(topic_id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicError::TopicNotFound)?;

        ensure_topic_access(&requester, &topic).map_err(|_| GetTopicError::TopicNotFound)?;

        let entries = self
            .entry_query
            .entries_for_topic(topic.id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?;

        Ok(TopicDetail { topic, entries })
    }
}
