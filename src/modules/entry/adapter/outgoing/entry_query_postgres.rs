use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::domain::entities::Entry;
use crate::modules::entry::application::ports::outgoing::{EntryQuery, EntryQueryError};

use super::sea_orm_entity::{Column as EntryColumn, Entity as EntryEntity, Model as EntryModel};

#[derive(Debug, Clone)]
pub struct EntryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryQuery for EntryQueryPostgres {
    async fn entries_for_topic(&self, topic_id: Uuid) -> Result<Vec<Entry>, EntryQueryError> {
        let models = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .order_by_desc(EntryColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(EntryModel::to_entry).collect())
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, EntryQueryError> {
        let model = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(EntryModel::to_entry))
    }
}
