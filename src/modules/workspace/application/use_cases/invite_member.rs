use crate::modules::auth::application::domain::entities::TokenPurpose;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::auth::application::services::token::TokenCodec;
use crate::modules::email::application::ports::outgoing::AuthEmailNotifier;
use crate::modules::workspace::application::domain::entities::{
    WorkspaceInvite, WorkspaceRole,
};
use crate::modules::workspace::application::ports::outgoing::{
    WorkspaceRepository, WorkspaceRepositoryError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum InviteMemberError {
    #[error("Workspace not found")]
    WorkspaceNotFound,
    #[error("Inviter is not allowed to manage members")]
    Forbidden,
    #[error("No account registered for that email")]
    InviteeNotFound,
    #[error("User is already a member")]
    AlreadyMember,
    #[error("An invite for this user is still pending")]
    AlreadyInvited,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Invite email dispatch failed: {0}")]
    NotificationDispatchFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct InviteMemberInput {
    pub workspace_id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_email: String,
    pub role: WorkspaceRole,
}

#[async_trait]
pub trait IInviteMemberUseCase: Send + Sync {
    async fn execute(&self, input: InviteMemberInput) -> Result<(), InviteMemberError>;
}

/// Issues a signed invite token bound to the invitee's account, records the
/// pending invite, and mails the link. Only one pending invite per user per
/// workspace; an expired one is cleared and replaced on the next attempt.
pub struct InviteMemberUseCase<R, Q>
where
    R: WorkspaceRepository,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    user_query: Q,
    token_codec: TokenCodec,
    notifier: Arc<dyn AuthEmailNotifier>,
}

impl<R, Q> InviteMemberUseCase<R, Q>
where
    R: WorkspaceRepository,
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        user_query: Q,
        token_codec: TokenCodec,
        notifier: Arc<dyn AuthEmailNotifier>,
    ) -> Self {
        Self {
            repository,
            user_query,
            token_codec,
            notifier,
        }
    }
}

#[async_trait]
impl<R, Q> IInviteMemberUseCase for InviteMemberUseCase<R, Q>
where
    R: WorkspaceRepository,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: InviteMemberInput) -> Result<(), InviteMemberError> {
        let workspace = self
            .repository
            .find_by_id(input.workspace_id)
            .await
            .map_err(|e| InviteMemberError::RepositoryError(e.to_string()))?
            .ok_or(InviteMemberError::WorkspaceNotFound)?;

        let inviter = self
            .repository
            .find_member(input.workspace_id, input.inviter_id)
            .await
            .map_err(|e| InviteMemberError::RepositoryError(e.to_string()))?
            .ok_or(InviteMemberError::Forbidden)?;
        if !inviter.role.can_manage_members() {
            return Err(InviteMemberError::Forbidden);
        }

        let invitee = self
            .user_query
            .find_by_email(&input.invitee_email)
            .await
            .map_err(|e| InviteMemberError::RepositoryError(e.to_string()))?
            .ok_or(InviteMemberError::InviteeNotFound)?;

        if self
            .repository
            .find_member(input.workspace_id, invitee.id)
            .await
            .map_err(|e| InviteMemberError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(InviteMemberError::AlreadyMember);
        }

        if let Some(pending) = self
            .repository
            .find_invite_by_workspace_and_user(input.workspace_id, invitee.id)
            .await
            .map_err(|e| InviteMemberError::RepositoryError(e.to_string()))?
        {
            if !pending.is_expired() {
                return Err(InviteMemberError::AlreadyInvited);
            }
            if let Err(e) = self.repository.delete_invite(pending.id).await {
                warn!(
                    invite_id = %pending.id,
                    error = %e,
                    "Failed to clear expired invite, continuing"
                );
            }
        }

        let token = self
            .token_codec
            .issue(invitee.id, TokenPurpose::WorkspaceInvite)
            .map_err(|e| InviteMemberError::TokenGenerationFailed(e.to_string()))?;
        let expires_at = Utc::now() + self.token_codec.ttl_for(TokenPurpose::WorkspaceInvite);

        let invite = WorkspaceInvite::new(
            input.workspace_id,
            invitee.id,
            token.clone(),
            input.role,
            expires_at,
        );
        self.repository
            .create_invite(invite)
            .await
            .map_err(|e| match e {
                WorkspaceRepositoryError::AlreadyInvited => InviteMemberError::AlreadyInvited,
                other => InviteMemberError::RepositoryError(other.to_string()),
            })?;

        self.notifier
            .send_workspace_invite_email(&invitee.email, &invitee.name, &workspace.name, &token)
            .await
            .map_err(|e| InviteMemberError::NotificationDispatchFailed(e.to_string()))?;

        Ok(())
    }
}
