use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationError {
    #[error("Email dispatch failed: {0}")]
    DispatchFailed(String),
}

/// Account-lifecycle notifications dispatched by the auth and workspace
/// flows. Implementations own subject lines, bodies, and links.
#[async_trait]
pub trait AuthEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), NotificationError>;

    async fn send_password_reset_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), NotificationError>;

    async fn send_workspace_invite_email(
        &self,
        to: &str,
        name: &str,
        workspace_name: &str,
        token: &str,
    ) -> Result<(), NotificationError>;
}
