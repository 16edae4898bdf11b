use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::services::hash::PasswordHashingService;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email address already in use")]
    DuplicateEmail,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<User> for RegisterUserOutput {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

/// Creates the unverified user record. There is deliberately no
/// find-before-insert: the unique index on email is the duplicate check,
/// so two concurrent registrations cannot both succeed.
#[derive(Debug, Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: PasswordHashingService,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: PasswordHashingService) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(input.password)
            .await
            .map_err(RegisterUserError::HashingFailed)?;

        let user = self
            .repository
            .create_user(CreateUserData {
                email: input.email,
                name: input.name,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::DuplicateEmail,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        Ok(user.into())
    }
}
