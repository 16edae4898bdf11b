use crate::modules::auth::application::domain::entities::TokenPurpose;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, VerificationLedger,
};
use crate::modules::auth::application::services::token::TokenCodec;
use async_trait::async_trait;
use tracing::warn;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    /// Single variant for forged, foreign-purpose, expired, and already
    /// consumed tokens. The caller learns nothing beyond "try again".
    #[error("Invalid or expired token")]
    TokenInvalidOrExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("Email address is already verified")]
    AlreadyVerified,
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Ledger error: {0}")]
    LedgerError(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), VerifyEmailError>;
}

/// Consumes a verification token: the signature proves origin, the ledger
/// row proves it has not been used yet. Both must agree before the user's
/// verified flag flips.
#[derive(Debug, Clone)]
pub struct VerifyEmailUseCase<Q, R, L>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    query: Q,
    repository: R,
    ledger: L,
    token_codec: TokenCodec,
}

impl<Q, R, L> VerifyEmailUseCase<Q, R, L>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    pub fn new(query: Q, repository: R, ledger: L, token_codec: TokenCodec) -> Self {
        Self {
            query,
            repository,
            ledger,
            token_codec,
        }
    }
}

#[async_trait]
impl<Q, R, L> IVerifyEmailUseCase for VerifyEmailUseCase<Q, R, L>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    L: VerificationLedger + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<(), VerifyEmailError> {
        let claims = self
            .token_codec
            .verify_for(token, TokenPurpose::EmailVerification)
            .map_err(|_| VerifyEmailError::TokenInvalidOrExpired)?;

        let record = self
            .ledger
            .find_by_user_and_token(claims.sub, token)
            .await
            .map_err(|e| VerifyEmailError::LedgerError(e.to_string()))?
            .ok_or(VerifyEmailError::TokenInvalidOrExpired)?;

        if record.is_expired() {
            // Lazy cleanup; the row is already useless either way.
            if let Err(e) = self.ledger.delete_by_id(record.id).await {
                warn!(record_id = %record.id, error = %e, "Failed to remove expired verification record");
            }
            return Err(VerifyEmailError::TokenInvalidOrExpired);
        }

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| VerifyEmailError::QueryError(e.to_string()))?
            .ok_or(VerifyEmailError::UserNotFound)?;

        if user.is_email_verified {
            return Err(VerifyEmailError::AlreadyVerified);
        }

        self.repository
            .mark_verified(user.id)
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?;

        self.ledger
            .delete_by_id(record.id)
            .await
            .map_err(|e| VerifyEmailError::LedgerError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{User, VerificationRecord};
    use crate::modules::auth::application::ports::outgoing::{
        CreateUserData, UserQueryError, UserRepositoryError, VerificationLedgerError,
    };
    use crate::modules::auth::application::services::token::TokenConfig;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }
    }

    #[derive(Default)]
    struct MockUserRepository {
        verified: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, _data: CreateUserData) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn mark_verified(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            self.verified.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn update_password(
            &self,
            _user_id: Uuid,
            _new_password_hash: String,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn touch_last_login(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    /// In-memory ledger so consumption and replay behave like the real table.
    #[derive(Default, Clone)]
    struct InMemoryLedger {
        records: Arc<Mutex<Vec<VerificationRecord>>>,
    }

    impl InMemoryLedger {
        fn with_record(record: VerificationRecord) -> Self {
            Self {
                records: Arc::new(Mutex::new(vec![record])),
            }
        }

        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl VerificationLedger for InMemoryLedger {
        async fn find_by_user_and_purpose(
            &self,
            user_id: Uuid,
            purpose: TokenPurpose,
        ) -> Result<Option<VerificationRecord>, VerificationLedgerError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.user_id == user_id && r.purpose == purpose)
                .cloned())
        }

        async fn find_by_user_and_token(
            &self,
            user_id: Uuid,
            token: &str,
        ) -> Result<Option<VerificationRecord>, VerificationLedgerError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.user_id == user_id && r.token == token)
                .cloned())
        }

        async fn create(
            &self,
            record: VerificationRecord,
        ) -> Result<(), VerificationLedgerError> {
            let mut records = self.records.lock().unwrap();
            if records
                .iter()
                .any(|r| r.user_id == record.user_id && r.purpose == record.purpose)
            {
                return Err(VerificationLedgerError::ActiveRecordExists);
            }
            records.push(record);
            Ok(())
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<(), VerificationLedgerError> {
            self.records.lock().unwrap().retain(|r| r.id != id);
            Ok(())
        }

        async fn delete_by_user(&self, user_id: Uuid) -> Result<(), VerificationLedgerError> {
            self.records.lock().unwrap().retain(|r| r.user_id != user_id);
            Ok(())
        }
    }

    fn test_codec() -> TokenCodec {
        TokenCodec::new(TokenConfig {
            secret: "verify-test-secret".to_string(),
            previous_secret: None,
            verification_ttl_secs: 3600,
            reset_ttl_secs: 900,
            session_ttl_secs: 604_800,
            invite_ttl_secs: 604_800,
        })
    }

    fn unverified_user(id: Uuid) -> User {
        User {
            id,
            email: "carol@example.com".to_string(),
            name: "Carol".to_string(),
            password_hash: "hash".to_string(),
            is_email_verified: false,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ledger_record(user_id: Uuid, token: &str, ttl: Duration) -> VerificationRecord {
        VerificationRecord::new(
            user_id,
            token.to_string(),
            TokenPurpose::EmailVerification,
            Utc::now() + ttl,
        )
    }

    #[tokio::test]
    async fn valid_token_marks_verified_and_consumes_the_record() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();
        let token = codec.issue(user_id, TokenPurpose::EmailVerification).unwrap();

        let verified = Arc::new(AtomicUsize::new(0));
        let ledger = InMemoryLedger::with_record(ledger_record(
            user_id,
            &token,
            Duration::hours(1),
        ));
        let use_case = VerifyEmailUseCase::new(
            MockUserQuery {
                user: Some(unverified_user(user_id)),
            },
            MockUserRepository {
                verified: verified.clone(),
            },
            ledger.clone(),
            codec,
        );

        use_case.execute(&token).await.expect("should verify");
        assert_eq!(verified.load(Ordering::SeqCst), 1);
        assert_eq!(ledger.len(), 0, "record must be consumed");

        // Replay: the signature is still valid but the ledger row is gone.
        let replay = use_case.execute(&token).await;
        assert!(matches!(replay, Err(VerifyEmailError::TokenInvalidOrExpired)));
        assert_eq!(verified.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn token_minted_for_another_purpose_is_rejected() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();
        let reset_token = codec.issue(user_id, TokenPurpose::ResetPassword).unwrap();

        let use_case = VerifyEmailUseCase::new(
            MockUserQuery {
                user: Some(unverified_user(user_id)),
            },
            MockUserRepository::default(),
            InMemoryLedger::default(),
            codec,
        );

        let result = use_case.execute(&reset_token).await;
        assert!(matches!(result, Err(VerifyEmailError::TokenInvalidOrExpired)));
    }

    #[tokio::test]
    async fn missing_ledger_record_invalidates_a_well_signed_token() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();
        let token = codec.issue(user_id, TokenPurpose::EmailVerification).unwrap();

        let use_case = VerifyEmailUseCase::new(
            MockUserQuery {
                user: Some(unverified_user(user_id)),
            },
            MockUserRepository::default(),
            InMemoryLedger::default(),
            codec,
        );

        let result = use_case.execute(&token).await;
        assert!(matches!(result, Err(VerifyEmailError::TokenInvalidOrExpired)));
    }

    #[tokio::test]
    async fn expired_ledger_record_is_lazily_deleted() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();
        let token = codec.issue(user_id, TokenPurpose::EmailVerification).unwrap();

        let ledger = InMemoryLedger::with_record(ledger_record(
            user_id,
            &token,
            Duration::seconds(-5),
        ));
        let use_case = VerifyEmailUseCase::new(
            MockUserQuery {
                user: Some(unverified_user(user_id)),
            },
            MockUserRepository::default(),
            ledger.clone(),
            codec,
        );

        let result = use_case.execute(&token).await;
        assert!(matches!(result, Err(VerifyEmailError::TokenInvalidOrExpired)));
        assert_eq!(ledger.len(), 0, "stale record must be removed");
    }

    #[tokio::test]
    async fn unknown_user_is_reported_as_not_found() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();
        let token = codec.issue(user_id, TokenPurpose::EmailVerification).unwrap();

        let use_case = VerifyEmailUseCase::new(
            MockUserQuery { user: None },
            MockUserRepository::default(),
            InMemoryLedger::with_record(ledger_record(
                user_id,
                &token,
                Duration::hours(1),
            )),
            codec,
        );

        let result = use_case.execute(&token).await;
        assert!(matches!(result, Err(VerifyEmailError::UserNotFound)));
    }

    #[tokio::test]
    async fn already_verified_user_keeps_flag_and_gets_conflict() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();
        let token = codec.issue(user_id, TokenPurpose::EmailVerification).unwrap();

        let mut user = unverified_user(user_id);
        user.is_email_verified = true;

        let verified = Arc::new(AtomicUsize::new(0));
        let use_case = VerifyEmailUseCase::new(
            MockUserQuery { user: Some(user) },
            MockUserRepository {
                verified: verified.clone(),
            },
            InMemoryLedger::with_record(ledger_record(
                user_id,
                &token,
                Duration::hours(1),
            )),
            codec,
        );

        let result = use_case.execute(&token).await;
        assert!(matches!(result, Err(VerifyEmailError::AlreadyVerified)));
        assert_eq!(verified.load(Ordering::SeqCst), 0);
    }
}
