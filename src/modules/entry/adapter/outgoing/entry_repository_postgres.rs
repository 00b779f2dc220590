use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::domain::entities::Entry;
use crate::modules::entry::application::ports::outgoing::{
    CreateEntryData, EntryRepository, EntryRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as EntryActiveModel, Entity as EntryEntity};

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(&self, data: CreateEntryData) -> Result<Entry, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            text: Set(data.text),
            date_added: Set(chrono::Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| EntryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_entry())
    }

    async fn update_text(
        &self,
        entry_id: Uuid,
        text: String,
    ) -> Result<Entry, EntryRepositoryError> {
        let entry = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(|e| EntryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        let mut active: EntryActiveModel = entry.into();
        active.text = Set(text);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| EntryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_entry())
    }
}
