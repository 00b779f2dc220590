use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_topics(models: Vec<TopicModel>) -> Vec<Topic> {
    models.into_iter().map(TopicModel::to_topic).collect()
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let models = TopicEntity::find()
            .order_by_asc(TopicColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(to_topics(models))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Topic>, TopicQueryError> {
        let models = TopicEntity::find()
            .filter(TopicColumn::UserId.eq(owner.value()))
            .order_by_asc(TopicColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(to_topics(models))
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| {
                tracing::error!(topic_id = %topic_id, error = %e, "Topic lookup failed");
                TopicQueryError::DatabaseError(e.to_string())
            })?;

        Ok(model.map(TopicModel::to_topic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Transaction};

    fn create_topic_model(user_id: Uuid, text: &str, offset_seconds: i64) -> TopicModel {
        TopicModel {
            id: Uuid::new_v4(),
            user_id,
            text: text.to_string(),
            date_added: (Utc::now() + chrono::Duration::seconds(offset_seconds)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_by_owner_filters_and_orders_ascending() {
        let user_uuid = Uuid::new_v4();
        let owner = UserId::from(user_uuid);

        let first = create_topic_model(user_uuid, "Chess", 10);
        let second = create_topic_model(user_uuid, "Go", 20);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();
        let db = Arc::new(db);

        let query = TopicQueryPostgres::new(Arc::clone(&db));
        let topics = query.list_by_owner(owner).await.unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].text, "Chess");
        assert_eq!(topics[1].owner, owner);

        drop(query);
        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        assert_eq!(
            log,
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "topics"."id", "topics"."user_id", "topics"."text", "topics"."date_added" FROM "topics" WHERE "topics"."user_id" = $1 ORDER BY "topics"."date_added" ASC"#,
                [user_uuid.into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_list_all_returns_every_topic() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                create_topic_model(Uuid::new_v4(), "Chess", 10),
                create_topic_model(Uuid::new_v4(), "Rock Climbing", 20),
            ]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));
        let topics = query.list_all().await.unwrap();

        assert_eq!(topics.len(), 2);
        assert_ne!(topics[0].owner, topics[1].owner);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));
        let result = query.list_all().await;

        assert!(matches!(result, Err(TopicQueryError::DatabaseError(_))));
    }
}
