use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
}

/// Who is making the request. Threaded explicitly into every use case that
/// needs an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester {
    Guest,
    Account { user_id: UserId, is_superuser: bool },
}

impl Requester {
    pub fn account(user_id: UserId) -> Self {
        Requester::Account {
            user_id,
            is_superuser: false,
        }
    }

    pub fn superuser(user_id: UserId) -> Self {
        Requester::Account {
            user_id,
            is_superuser: true,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Requester::Guest => None,
            Requester::Account { user_id, .. } => Some(*user_id),
        }
    }

    pub fn is_superuser(&self) -> bool {
        matches!(
            self,
            Requester::Account {
                is_superuser: true,
                ..
            }
        )
    }
}
