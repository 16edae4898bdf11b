use crate::modules::auth::application::domain::entities::{TokenPurpose, VerificationRecord};
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, VerificationLedger, VerificationLedgerError,
};
use crate::modules::auth::application::services::token::TokenCodec;
use crate::modules::email::application::ports::outgoing::AuthEmailNotifier;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("User not found")]
    UserNotFound,
    #[error("Email address has not been verified")]
    EmailNotVerified,
    #[error("A password reset was already requested recently")]
    AlreadyRequested,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Failed to send password reset email: {0}")]
    NotificationDispatchFailed(String),
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Ledger error: {0}")]
    LedgerError(String),
}

#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError>;
}

/// Starts the reset flow for a verified account. The short-lived reset
/// record doubles as a rate limit: while one is pending, further requests
/// are refused instead of flooding the inbox.
pub struct RequestPasswordResetUseCase<Q, L>
where
    Q: UserQuery + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    query: Q,
    ledger: L,
    token_codec: TokenCodec,
    notifier: Arc<dyn AuthEmailNotifier>,
}

impl<Q, L> RequestPasswordResetUseCase<Q, L>
where
    Q: UserQuery + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    pub fn new(
        query: Q,
        ledger: L,
        token_codec: TokenCodec,
        notifier: Arc<dyn AuthEmailNotifier>,
    ) -> Self {
        Self {
            query,
            ledger,
            token_codec,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, L> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q, L>
where
    Q: UserQuery + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError> {
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| RequestPasswordResetError::QueryError(e.to_string()))?
            .ok_or(RequestPasswordResetError::UserNotFound)?;

        if !user.is_email_verified {
            return Err(RequestPasswordResetError::EmailNotVerified);
        }

        let existing = self
            .ledger
            .find_by_user_and_purpose(user.id, TokenPurpose::ResetPassword)
            .await
            .map_err(|e| RequestPasswordResetError::LedgerError(e.to_string()))?;

        if let Some(record) = existing {
            if !record.is_expired() {
                return Err(RequestPasswordResetError::AlreadyRequested);
            }
            if let Err(e) = self.ledger.delete_by_id(record.id).await {
                warn!(record_id = %record.id, error = %e, "Failed to remove expired reset record");
            }
        }

        let token = self
            .token_codec
            .issue(user.id, TokenPurpose::ResetPassword)
            .map_err(|e| RequestPasswordResetError::TokenGenerationFailed(e.to_string()))?;

        let expires_at = Utc::now() + self.token_codec.ttl_for(TokenPurpose::ResetPassword);
        self.ledger
            .create(VerificationRecord::new(
                user.id,
                token.clone(),
                TokenPurpose::ResetPassword,
                expires_at,
            ))
            .await
            .map_err(|e| match e {
                VerificationLedgerError::ActiveRecordExists => {
                    RequestPasswordResetError::AlreadyRequested
                }
                other => RequestPasswordResetError::LedgerError(other.to_string()),
            })?;

        // Dispatch is awaited here: if the email never leaves, the caller
        // must know, because there is no other way to obtain the token.
        self.notifier
            .send_password_reset_email(&user.email, &user.name, &token)
            .await
            .map_err(|e| RequestPasswordResetError::NotificationDispatchFailed(e.to_string()))?;

        Ok(())
    }
}
