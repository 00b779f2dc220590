use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Listings are ordered by ascending `date_added`.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError>;
}
