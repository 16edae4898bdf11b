use crate::modules::auth::application::domain::entities::{SanitizedUser, TokenPurpose};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::modules::auth::application::services::hash::PasswordHashingService;
use crate::modules::auth::application::services::token::TokenCodec;
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    /// Covers both an unknown email and a wrong password. Callers must not
    /// be able to tell which one it was.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email address has not been verified")]
    EmailNotVerified,
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginUserOutput {
    pub token: String,
    pub user: SanitizedUser,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginUserInput) -> Result<LoginUserOutput, LoginUserError>;
}

#[derive(Debug, Clone)]
pub struct LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
    token_codec: TokenCodec,
}

impl<Q, R> LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: PasswordHashingService,
        token_codec: TokenCodec,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_codec,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUserUseCase for LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: LoginUserInput) -> Result<LoginUserOutput, LoginUserError> {
        let user = self
            .query
            .find_by_email(&input.email)
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?
            .ok_or(LoginUserError::InvalidCredentials)?;

        // The password check comes before the verification check so that an
        // unverified account's existence is only revealed to its owner.
        let password_matches = self
            .password_hasher
            .verify_password(input.password, user.password_hash.clone())
            .await
            .map_err(LoginUserError::PasswordVerificationFailed)?;
        if !password_matches {
            return Err(LoginUserError::InvalidCredentials);
        }

        if !user.is_email_verified {
            return Err(LoginUserError::EmailNotVerified);
        }

        let token = self
            .token_codec
            .issue(user.id, TokenPurpose::Login)
            .map_err(|e| LoginUserError::TokenGenerationFailed(e.to_string()))?;

        self.repository
            .touch_last_login(user.id)
            .await
            .map_err(|e| LoginUserError::RepositoryError(e.to_string()))?;

        let mut sanitized = user.sanitized();
        sanitized.last_login_at = Some(Utc::now());

        Ok(LoginUserOutput {
            token,
            user: sanitized,
        })
    }
}
