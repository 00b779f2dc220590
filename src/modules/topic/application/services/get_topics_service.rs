use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::Requester,
    topic::application::{
        domain::entities::Topic,
        ports::incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
        ports::outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, requester: Requester) -> Result<Vec<Topic>, GetTopicsError> {
        let result = match requester {
            Requester::Guest => return Ok(Vec::new()),
            Requester::Account {
                is_superuser: true, ..
            } => self.query.list_all().await,
            Requester::Account { user_id, .. } => self.query.list_by_owner(user_id).await,
        };

        result.map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}
