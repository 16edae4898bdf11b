use crate::modules::email::application::ports::outgoing::{
    AuthEmailNotifier, EmailSender, NotificationError,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Composes the account-lifecycle mails and hands them to the transport.
/// Links point into the frontend, which posts the embedded token back to
/// the matching API endpoint.
#[derive(Clone)]
pub struct EmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    frontend_url: String,
}

impl fmt::Debug for EmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("frontend_url", &self.frontend_url)
            .finish()
    }
}

impl EmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, frontend_url: String) -> Self {
        Self {
            sender,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AuthEmailNotifier for EmailService {
    async fn send_verification_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), NotificationError> {
        let link = format!("{}/verify-email?token={}", self.frontend_url, token);
        let text = format!(
            "Hi {name},\n\nClick the following link to verify your email address: {link}\n\n\
             The link is valid for one hour."
        );
        let html = format!(
            r#"<p>Hi {name},</p>
<p>Click <a href="{link}">here</a> to verify your email address.</p>
<p>The link is valid for one hour.</p>
<p>Thanks,<br>The TaskHUB Team</p>"#
        );

        self.sender
            .send(to, "Verify your email address", &text, &html)
            .await
            .map_err(NotificationError::DispatchFailed)
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        name: &str,
        token: &str,
    ) -> Result<(), NotificationError> {
        let link = format!("{}/reset-password?token={}", self.frontend_url, token);
        let text = format!(
            "Hi {name},\n\nClick the following link to reset your password: {link}\n\n\
             The link expires in 15 minutes. If you did not request a reset, ignore this mail."
        );
        let html = format!(
            r#"<p>Hi {name},</p>
<p>Click <a href="{link}">here</a> to reset your password.</p>
<p>The link expires in 15 minutes. If you did not request a reset, ignore this mail.</p>
<p>Thanks,<br>The TaskHUB Team</p>"#
        );

        self.sender
            .send(to, "Reset Your Password", &text, &html)
            .await
            .map_err(NotificationError::DispatchFailed)
    }

    async fn send_workspace_invite_email(
        &self,
        to: &str,
        name: &str,
        workspace_name: &str,
        token: &str,
    ) -> Result<(), NotificationError> {
        let link = format!("{}/workspace-invite?token={}", self.frontend_url, token);
        let text = format!(
            "Hi {name},\n\nYou have been invited to the workspace \"{workspace_name}\". \
             Accept the invitation here: {link}"
        );
        let html = format!(
            r#"<p>Hi {name},</p>
<p>You have been invited to the workspace <strong>{workspace_name}</strong>.</p>
<p>Click <a href="{link}">here</a> to accept the invitation.</p>
<p>Thanks,<br>The TaskHUB Team</p>"#
        );

        self.sender
            .send(to, "You have been invited to a workspace", &text, &html)
            .await
            .map_err(NotificationError::DispatchFailed)
    }
}
