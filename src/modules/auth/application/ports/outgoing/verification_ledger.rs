use crate::modules::auth::application::domain::entities::{TokenPurpose, VerificationRecord};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationLedgerError {
    /// The unique index on (user_id, purpose) rejected the insert: a record
    /// for this pair already exists. Two concurrent requests cannot both
    /// create one.
    #[error("An active record already exists for this user and purpose")]
    ActiveRecordExists,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence port for single-use verification records.
///
/// Lookups return the record regardless of expiry; callers judge
/// [`VerificationRecord::is_expired`] themselves so that stale rows can be
/// lazily deleted when next encountered (there is no background sweeper).
#[async_trait]
pub trait VerificationLedger: Send + Sync {
    async fn find_by_user_and_purpose(
        &self,
        user_id: Uuid,
        purpose: TokenPurpose,
    ) -> Result<Option<VerificationRecord>, VerificationLedgerError>;

    async fn find_by_user_and_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<VerificationRecord>, VerificationLedgerError>;

    async fn create(&self, record: VerificationRecord) -> Result<(), VerificationLedgerError>;

    async fn delete_by_id(&self, record_id: Uuid) -> Result<(), VerificationLedgerError>;

    async fn delete_by_user(&self, user_id: Uuid) -> Result<(), VerificationLedgerError>;
}
