use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::ACCESS_TOKEN_TYPE;
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider,
};

/// Predictable "hash" so tests can assert on stored values.
#[derive(Default, Clone)]
pub struct FakePasswordHasher;

impl FakePasswordHasher {
    pub fn hash(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(Self::hash(password) == hash)
    }
}

const TOKEN_PREFIX: &str = "test-token";

/// Unsigned tokens of the form `test-token:{type}:{user_id}:{is_superuser}`.
#[derive(Default, Clone)]
pub struct FakeTokenProvider;

impl FakeTokenProvider {
    fn token(token_type: &str, user_id: Uuid, is_superuser: bool) -> String {
        format!("{TOKEN_PREFIX}:{token_type}:{user_id}:{is_superuser}")
    }

    pub fn data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(FakeTokenProvider);
        web::Data::new(provider)
    }

    pub fn bearer(user_id: Uuid, is_superuser: bool) -> (&'static str, String) {
        (
            "Authorization",
            format!("Bearer {}", Self::token(ACCESS_TOKEN_TYPE, user_id, is_superuser)),
        )
    }

    /// Verifies, but is not an access token.
    pub fn refresh_token(user_id: Uuid) -> String {
        Self::token("refresh", user_id, false)
    }
}

impl TokenProvider for FakeTokenProvider {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_superuser: bool,
    ) -> Result<String, TokenError> {
        Ok(Self::token(ACCESS_TOKEN_TYPE, user_id, is_superuser))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let parts: Vec<&str> = token.split(':').collect();
        let [prefix, token_type, user_id, is_superuser] = parts.as_slice() else {
            return Err(TokenError::MalformedToken);
        };
        if *prefix != TOKEN_PREFIX {
            return Err(TokenError::InvalidSignature);
        }

        let sub = Uuid::parse_str(user_id).map_err(|_| TokenError::MalformedToken)?;
        let is_superuser = is_superuser
            .parse::<bool>()
            .map_err(|_| TokenError::MalformedToken)?;
        let now = chrono::Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "learning_log".to_string(),
            token_type: token_type.to_string(),
            is_superuser,
        })
    }
}
