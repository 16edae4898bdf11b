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
pub enum ResendVerificationError {
    #[error("User not found")]
    UserNotFound,
    #[error("Email address is already verified")]
    AlreadyVerified,
    #[error("A verification email was already sent recently")]
    AlreadyRequested,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Failed to send verification email: {0}")]
    NotificationDispatchFailed(String),
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Ledger error: {0}")]
    LedgerError(String),
}

#[async_trait]
pub trait IResendVerificationUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError>;
}

/// Re-issues the verification email for an account that never completed
/// registration. At most one active verification record exists per user, so
/// repeated requests inside the token's lifetime are refused.
pub struct ResendVerificationUseCase<Q, L>
where
    Q: UserQuery + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    query: Q,
    ledger: L,
    token_codec: TokenCodec,
    notifier: Arc<dyn AuthEmailNotifier>,
}

impl<Q, L> ResendVerificationUseCase<Q, L>
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
impl<Q, L> IResendVerificationUseCase for ResendVerificationUseCase<Q, L>
where
    Q: UserQuery + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError> {
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| ResendVerificationError::QueryError(e.to_string()))?
            .ok_or(ResendVerificationError::UserNotFound)?;

        if user.is_email_verified {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        let existing = self
            .ledger
            .find_by_user_and_purpose(user.id, TokenPurpose::EmailVerification)
            .await
            .map_err(|e| ResendVerificationError::LedgerError(e.to_string()))?;

        if let Some(record) = existing {
            if !record.is_expired() {
                return Err(ResendVerificationError::AlreadyRequested);
            }
            if let Err(e) = self.ledger.delete_by_id(record.id).await {
                warn!(record_id = %record.id, error = %e, "Failed to remove expired verification record");
            }
        }

        let token = self
            .token_codec
            .issue(user.id, TokenPurpose::EmailVerification)
            .map_err(|e| ResendVerificationError::TokenGenerationFailed(e.to_string()))?;

        let expires_at = Utc::now() + self.token_codec.ttl_for(TokenPurpose::EmailVerification);
        self.ledger
            .create(VerificationRecord::new(
                user.id,
                token.clone(),
                TokenPurpose::EmailVerification,
                expires_at,
            ))
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent request for the same user.
                VerificationLedgerError::ActiveRecordExists => {
                    ResendVerificationError::AlreadyRequested
                }
                other => ResendVerificationError::LedgerError(other.to_string()),
            })?;

        self.notifier
            .send_verification_email(&user.email, &user.name, &token)
            .await
            .map_err(|e| ResendVerificationError::NotificationDispatchFailed(e.to_string()))?;

        Ok(())
    }
}
