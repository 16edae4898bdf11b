use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            is_email_verified: model.is_email_verified,
            last_login_at: model.last_login_at.map(|t| t.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        let err_str = err.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }

    async fn load(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            is_email_verified: Set(false),
            last_login_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_user(inserted))
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.is_email_verified = Set(true);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.password_hash = Set(new_password_hash);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn touch_last_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.last_login_at = Set(Some(Utc::now().into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn to_fixed_offset(dt: DateTime<Utc>) -> DateTime<FixedOffset> {
        dt.fixed_offset()
    }

    fn user_model(id: Uuid, verified: bool) -> UserModel {
        let now = to_fixed_offset(Utc::now());
        UserModel {
            id,
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            password_hash: "hashed_password".to_string(),
            is_email_verified: verified,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_user_returns_the_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, false)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let user = repository
            .create_user(CreateUserData {
                email: "test@example.com".to_string(),
                name: "Test User".to_string(),
                password_hash: "hashed_password".to_string(),
            })
            .await
            .expect("insert should succeed");

        assert_eq!(user.email, "test@example.com");
        assert!(!user.is_email_verified);
    }

    #[tokio::test]
    async fn unique_violation_maps_to_email_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .create_user(CreateUserData {
                email: "test@example.com".to_string(),
                name: "Test User".to_string(),
                password_hash: "hashed_password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserRepositoryError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn mark_verified_flips_the_flag() {
        let id = Uuid::new_v4();
        let mut updated = user_model(id, true);
        updated.updated_at = to_fixed_offset(Utc::now());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, false)]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        assert!(repository.mark_verified(id).await.is_ok());
    }

    #[tokio::test]
    async fn mark_verified_unknown_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.mark_verified(Uuid::new_v4()).await;
        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn update_password_unknown_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_password(Uuid::new_v4(), "new_hash".to_string())
            .await;
        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn database_fault_surfaces_the_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        match repository.touch_last_login(Uuid::new_v4()).await {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"));
            }
            other => panic!("expected DatabaseError, got {other:?}"),
        }
    }
}
