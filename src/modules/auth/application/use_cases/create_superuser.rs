use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::{entities::Account, registration_form::RegistrationForm},
    ports::outgoing::{CreateAccountData, PasswordHasher, UserQuery, UserRepository},
};
use crate::shared::form::FormErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSuperuserError {
    #[error("Superuser credentials are invalid: {0:?}")]
    InvalidCredentials(FormErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Makes sure an account with the given username exists and is a superuser.
/// An existing account is promoted and its password replaced.
#[async_trait]
pub trait ICreateSuperuserUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str)
        -> Result<Account, CreateSuperuserError>;
}

#[derive(Clone)]
pub struct CreateSuperuserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateSuperuserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateSuperuserUseCase for CreateSuperuserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, CreateSuperuserError> {
        let valid = RegistrationForm {
            username: username.to_string(),
            password1: password.to_string(),
            password2: password.to_string(),
        }
        .validate()
        .map_err(CreateSuperuserError::InvalidCredentials)?;

        let password_hash = self
            .password_hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| CreateSuperuserError::HashingFailed(e.to_string()))?;

        let existing = self
            .query
            .find_by_username(&valid.username)
            .await
            .map_err(|e| CreateSuperuserError::RepositoryError(e.to_string()))?;

        let result = match existing {
            Some(account) => {
                self.repository
                    .promote_to_superuser(account.id, password_hash)
                    .await
            }
            None => {
                self.repository
                    .create_account(CreateAccountData {
                        username: valid.username,
                        password_hash,
                        is_superuser: true,
                    })
                    .await
            }
        };

        result.map_err(|e| CreateSuperuserError::RepositoryError(e.to_string()))
    }
}
