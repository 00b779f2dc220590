use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Account;

// Input DTO for creating an account
#[derive(Debug, Clone)]
pub struct CreateAccountData {
    pub username: String,
    pub password_hash: String,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_account(&self, data: CreateAccountData) -> Result<Account, UserRepositoryError>;

    /// Grants superuser rights and replaces the stored password hash.
    async fn promote_to_superuser(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<Account, UserRepositoryError>;
}
