use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::modules::auth::application::ports::outgoing::admission_control::{
    AdmissionControl, AdmissionDecision, AdmissionError, RequestContext,
};

const ADMISSION_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Serialize)]
struct AdmissionRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_agent: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct AdmissionResponse {
    allowed: bool,
    #[serde(default)]
    reason: Option<String>,
}

/// Calls an external admission service before registration. The service
/// screens for bots, burst traffic, and disposable or undeliverable email
/// addresses.
#[derive(Clone, Debug)]
pub struct HttpAdmissionControl {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAdmissionControl {
    pub fn new(endpoint: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(ADMISSION_TIMEOUT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AdmissionControl for HttpAdmissionControl {
    async fn protect(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> Result<AdmissionDecision, AdmissionError> {
        let body = AdmissionRequest {
            email,
            ip: ctx.ip.as_deref(),
            user_agent: ctx.user_agent.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdmissionError::ServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AdmissionError::ServiceUnavailable(format!(
                "Admission service returned {}",
                response.status()
            )));
        }

        let verdict: AdmissionResponse = response
            .json()
            .await
            .map_err(|e| AdmissionError::ServiceUnavailable(e.to_string()))?;

        if verdict.allowed {
            Ok(AdmissionDecision::Allow)
        } else {
            Ok(AdmissionDecision::Deny(
                verdict
                    .reason
                    .unwrap_or_else(|| "Registration rejected".to_string()),
            ))
        }
    }
}

/// Stand-in used when no admission endpoint is configured. Everything is
/// admitted, which is the right behavior for local development and tests.
#[derive(Clone, Debug, Default)]
pub struct PermissiveAdmission;

#[async_trait]
impl AdmissionControl for PermissiveAdmission {
    async fn protect(
        &self,
        _ctx: &RequestContext,
        _email: &str,
    ) -> Result<AdmissionDecision, AdmissionError> {
        Ok(AdmissionDecision::Allow)
    }
}

/// Picks the HTTP adapter when `ADMISSION_URL` is set, the permissive one
/// otherwise.
pub fn admission_from_env() -> std::sync::Arc<dyn AdmissionControl> {
    match std::env::var("ADMISSION_URL") {
        Ok(url) if !url.is_empty() => match HttpAdmissionControl::new(url) {
            Ok(adapter) => std::sync::Arc::new(adapter),
            Err(e) => {
                warn!(error = %e, "Failed to build admission client, admitting everyone");
                std::sync::Arc::new(PermissiveAdmission)
            }
        },
        _ => std::sync::Arc::new(PermissiveAdmission),
    }
}
