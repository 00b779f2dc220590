use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::form::FormErrors,
    topic::application::domain::{entities::Topic, topic_form::TopicForm},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Topic form is invalid")]
    Validation(FormErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Validates the form and stores a topic owned by `owner`.
#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, form: TopicForm) -> Result<Topic, CreateTopicError>;
}
