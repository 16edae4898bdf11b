use crate::modules::auth::application::domain::entities::TokenPurpose;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, VerificationLedger,
};
use crate::modules::auth::application::services::hash::PasswordHashingService;
use crate::modules::auth::application::services::token::TokenCodec;
use async_trait::async_trait;
use tracing::warn;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletePasswordResetError {
    #[error("Invalid or expired token")]
    TokenInvalidOrExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Ledger error: {0}")]
    LedgerError(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CompletePasswordResetInput {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[async_trait]
pub trait ICompletePasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        input: CompletePasswordResetInput,
    ) -> Result<(), CompletePasswordResetError>;
}

/// Finishes the reset flow. The reset record is consumed on success, so a
/// captured token cannot change the password twice.
#[derive(Debug, Clone)]
pub struct CompletePasswordResetUseCase<Q, R, L>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    query: Q,
    repository: R,
    ledger: L,
    token_codec: TokenCodec,
    password_hasher: PasswordHashingService,
}

impl<Q, R, L> CompletePasswordResetUseCase<Q, R, L>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        ledger: L,
        token_codec: TokenCodec,
        password_hasher: PasswordHashingService,
    ) -> Self {
        Self {
            query,
            repository,
            ledger,
            token_codec,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R, L> ICompletePasswordResetUseCase for CompletePasswordResetUseCase<Q, R, L>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    async fn execute(
        &self,
        input: CompletePasswordResetInput,
    ) -> Result<(), CompletePasswordResetError> {
        let claims = self
            .token_codec
            .verify_for(&input.token, TokenPurpose::ResetPassword)
            .map_err(|_| CompletePasswordResetError::TokenInvalidOrExpired)?;

        let record = self
            .ledger
            .find_by_user_and_token(claims.sub, &input.token)
            .await
            .map_err(|e| CompletePasswordResetError::LedgerError(e.to_string()))?
            .ok_or(CompletePasswordResetError::TokenInvalidOrExpired)?;

        if record.is_expired() {
            if let Err(e) = self.ledger.delete_by_id(record.id).await {
                warn!(record_id = %record.id, error = %e, "Failed to remove expired reset record");
            }
            return Err(CompletePasswordResetError::TokenInvalidOrExpired);
        }

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| CompletePasswordResetError::QueryError(e.to_string()))?
            .ok_or(CompletePasswordResetError::UserNotFound)?;

        if input.new_password != input.confirm_password {
            return Err(CompletePasswordResetError::PasswordMismatch);
        }

        let new_hash = self
            .password_hasher
            .hash_password(input.new_password)
            .await
            .map_err(CompletePasswordResetError::HashingFailed)?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| CompletePasswordResetError::RepositoryError(e.to_string()))?;

        self.ledger
            .delete_by_id(record.id)
            .await
            .map_err(|e| CompletePasswordResetError::LedgerError(e.to_string()))?;

        Ok(())
    }
}
