use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Account;
use crate::auth::application::ports::outgoing::{
    CreateAccountData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_account(&self, data: CreateAccountData) -> Result<Account, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            is_superuser: Set(data.is_superuser),
            date_joined: Set(chrono::Utc::now().into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_account())
    }

    async fn promote_to_superuser(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<Account, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_superuser = Set(true);
        active_user.password_hash = Set(password_hash);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_account())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_data() -> CreateAccountData {
        CreateAccountData {
            username: "testuser".to_string(),
            password_hash: "hashed_password".to_string(),
            is_superuser: false,
        }
    }

    fn user_model(id: Uuid, is_superuser: bool, password_hash: &str) -> UserModel {
        UserModel {
            id,
            username: "testuser".to_string(),
            password_hash: password_hash.to_string(),
            is_superuser,
            date_joined: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_account_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(
                Uuid::new_v4(),
                false,
                "hashed_password",
            )]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let account = repository.create_account(create_data()).await.unwrap();

        assert_eq!(account.username, "testuser");
        assert!(!account.is_superuser);
    }

    #[tokio::test]
    async fn test_create_account_duplicate_key_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let result = repository.create_account(create_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_account_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        match repository.create_account(create_data()).await.unwrap_err() {
            UserRepositoryError::DatabaseError(msg) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError variant, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_promote_to_superuser_success() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(user_id, false, "old_hash")]])
            .append_query_results(vec![vec![user_model(user_id, true, "new_hash")]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let account = repository
            .promote_to_superuser(user_id, "new_hash".to_string())
            .await
            .unwrap();

        assert_eq!(account.id, user_id);
        assert!(account.is_superuser);
        assert_eq!(account.password_hash, "new_hash");
    }

    #[tokio::test]
    async fn test_promote_to_superuser_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let result = repository
            .promote_to_superuser(Uuid::new_v4(), "new_hash".to_string())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }
}
