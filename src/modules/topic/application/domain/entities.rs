use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Topic {
    pub id: Uuid,
    #[schema(value_type = Uuid)]
    pub owner: UserId,
    #[schema(example = "Chess")]
    pub text: String,
    pub date_added: DateTime<Utc>,
}
