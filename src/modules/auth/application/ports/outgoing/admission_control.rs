use async_trait::async_trait;

/// Request metadata forwarded to the admission service.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Verdict from the bot/rate/email-validity protection in front of
/// registration. Deny reasons must be safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    Allow,
    Deny(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdmissionError {
    #[error("Admission service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[async_trait]
pub trait AdmissionControl: Send + Sync {
    async fn protect(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<AdmissionDecision, AdmissionError>;
}
