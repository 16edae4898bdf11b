use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    /// The unique index on email rejected the insert. This is the
    /// authoritative duplicate check; callers must not rely on a prior read.
    #[error("Email address already in use")]
    EmailAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub struct CreateUserData {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Write side of the credential store. Each mutation touches a single field.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
    async fn mark_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;
    async fn touch_last_login(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
