use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::Account;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub date_joined: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_account(self) -> Account {
        Account {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            is_superuser: self.is_superuser,
            date_joined: self.date_joined.with_timezone(&chrono::Utc),
        }
    }
}
