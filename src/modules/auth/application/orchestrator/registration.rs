use crate::modules::auth::application::domain::entities::{TokenPurpose, VerificationRecord};
use crate::modules::auth::application::ports::outgoing::{
    AdmissionControl, AdmissionDecision, RequestContext, VerificationLedger,
};
use crate::modules::auth::application::services::token::TokenCodec;
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::modules::email::application::ports::outgoing::AuthEmailNotifier;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

const EMAIL_DISPATCH_ATTEMPTS: u32 = 3;
const EMAIL_RETRY_BASE_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationError {
    /// The admission layer refused the request before any state changed.
    #[error("Registration rejected: {0}")]
    AdmissionDenied(String),
    #[error("Admission check failed: {0}")]
    AdmissionUnavailable(String),
    #[error(transparent)]
    RegisterUser(#[from] RegisterUserError),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Ledger error: {0}")]
    LedgerError(String),
}

/// Front door of the registration flow. Runs admission control, creates the
/// account, records the verification token, then hands the email off to a
/// background task so a slow SMTP relay never delays the response.
pub struct RegistrationOrchestrator {
    admission: Arc<dyn AdmissionControl>,
    register_user: Arc<dyn IRegisterUserUseCase>,
    ledger: Arc<dyn VerificationLedger>,
    token_codec: TokenCodec,
    notifier: Arc<dyn AuthEmailNotifier>,
}

impl RegistrationOrchestrator {
    pub fn new(
        admission: Arc<dyn AdmissionControl>,
        register_user: Arc<dyn IRegisterUserUseCase>,
        ledger: Arc<dyn VerificationLedger>,
        token_codec: TokenCodec,
        notifier: Arc<dyn AuthEmailNotifier>,
    ) -> Self {
        Self {
            admission,
            register_user,
            ledger,
            token_codec,
            notifier,
        }
    }

    pub async fn register(
        &self,
        input: RegisterUserInput,
        ctx: &RequestContext,
    ) -> Result<RegisterUserOutput, RegistrationError> {
        match self
            .admission
            .protect(ctx, &input.email)
            .await
            .map_err(|e| RegistrationError::AdmissionUnavailable(e.to_string()))?
        {
            AdmissionDecision::Allow => {}
            AdmissionDecision::Deny(reason) => {
                info!(email = %input.email, %reason, "Registration denied by admission control");
                return Err(RegistrationError::AdmissionDenied(reason));
            }
        }

        let output = self.register_user.execute(input).await?;

        let token = self
            .token_codec
            .issue(output.user_id, TokenPurpose::EmailVerification)
            .map_err(|e| RegistrationError::TokenGenerationFailed(e.to_string()))?;

        let expires_at = Utc::now() + self.token_codec.ttl_for(TokenPurpose::EmailVerification);
        self.ledger
            .create(VerificationRecord::new(
                output.user_id,
                token.clone(),
                TokenPurpose::EmailVerification,
                expires_at,
            ))
            .await
            .map_err(|e| RegistrationError::LedgerError(e.to_string()))?;

        // Fire and forget. A user who never receives the email recovers
        // through the resend endpoint.
        let notifier = Arc::clone(&self.notifier);
        let email = output.email.clone();
        let name = output.name.clone();
        tokio::spawn(async move {
            dispatch_with_retry(notifier, &email, &name, &token).await;
        });

        Ok(output)
    }
}

async fn dispatch_with_retry(
    notifier: Arc<dyn AuthEmailNotifier>,
    email: &str,
    name: &str,
    token: &str,
) {
    for attempt in 1..=EMAIL_DISPATCH_ATTEMPTS {
        match notifier.send_verification_email(email, name, token).await {
            Ok(()) => {
                info!(%email, attempt, "Verification email dispatched");
                return;
            }
            Err(e) if attempt < EMAIL_DISPATCH_ATTEMPTS => {
                let delay = EMAIL_RETRY_BASE_DELAY_MS * 2u64.pow(attempt - 1);
                warn!(%email, attempt, error = %e, delay_ms = delay, "Verification email failed, retrying");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            Err(e) => {
                error!(%email, error = %e, "Giving up on verification email");
            }
        }
    }
}
