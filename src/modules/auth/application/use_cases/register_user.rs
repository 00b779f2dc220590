use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::registration_form::{RegistrationForm, USERNAME_TAKEN_MESSAGE},
    ports::outgoing::{
        CreateAccountData, PasswordHasher, TokenProvider, UserQuery, UserRepository,
        UserRepositoryError,
    },
    use_cases::login_user::{issue_session, LoginUserResponse},
};
use crate::shared::form::FormErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Registration form is invalid")]
    InvalidForm(FormErrors),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates a regular account and logs it in.
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, form: RegistrationForm)
        -> Result<LoginUserResponse, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

fn username_taken() -> RegisterUserError {
    let mut errors = FormErrors::new();
    errors.add("username", USERNAME_TAKEN_MESSAGE);
    RegisterUserError::InvalidForm(errors)
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: RegistrationForm,
    ) -> Result<LoginUserResponse, RegisterUserError> {
        // 1️⃣ Field validation
        let valid = form.validate().map_err(RegisterUserError::InvalidForm)?;

        // 2️⃣ Username must be free
        let existing = self
            .query
            .find_by_username(&valid.username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(username_taken());
        }

        // 3️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // 4️⃣ Persist; a concurrent sign-up can still win the unique index
        let account = self
            .repository
            .create_account(CreateAccountData {
                username: valid.username,
                password_hash,
                is_superuser: false,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => username_taken(),
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        // 5️⃣ Log the new account in
        issue_session(self.token_provider.as_ref(), account)
            .map_err(RegisterUserError::TokenGenerationFailed)
    }
}
