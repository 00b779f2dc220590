use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Requester,
    entry::application::domain::entities::Entry,
    topic::application::domain::entities::Topic,
};

/// A topic with its entries, newest first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicDetail {
    pub topic: Topic,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    /// Also returned when the requester may not see the topic.
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        topic_id: Uuid,
    ) -> Result<TopicDetail, GetTopicError>;
}
