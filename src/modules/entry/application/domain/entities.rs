use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A dated note under a topic. `topic_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Entry {
    pub id: Uuid,
    pub topic_id: Uuid,
    #[schema(example = "Opened with e4")]
    pub text: String,
    pub date_added: DateTime<Utc>,
}
