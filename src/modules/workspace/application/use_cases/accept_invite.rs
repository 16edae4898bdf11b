use crate::modules::auth::application::domain::entities::TokenPurpose;
use crate::modules::auth::application::services::token::TokenCodec;
use crate::modules::workspace::application::domain::entities::WorkspaceMember;
use crate::modules::workspace::application::ports::outgoing::{
    WorkspaceRepository, WorkspaceRepositoryError,
};
use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AcceptInviteError {
    /// Covers forged, expired, consumed, and someone-else's tokens alike.
    #[error("Invalid or expired invite token")]
    TokenInvalidOrExpired,
    #[error("User is already a member")]
    AlreadyMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAcceptInviteUseCase: Send + Sync {
    async fn execute(
        &self,
        token: &str,
        accepting_user_id: Uuid,
    ) -> Result<WorkspaceMember, AcceptInviteError>;
}

/// Redeems an invite token. The signature proves who the invite was minted
/// for; the stored invite row makes it single use and carries the role.
pub struct AcceptInviteUseCase<R>
where
    R: WorkspaceRepository,
{
    repository: R,
    token_codec: TokenCodec,
}

impl<R> AcceptInviteUseCase<R>
where
    R: WorkspaceRepository,
{
    pub fn new(repository: R, token_codec: TokenCodec) -> Self {
        Self {
            repository,
            token_codec,
        }
    }
}

#[async_trait]
impl<R> IAcceptInviteUseCase for AcceptInviteUseCase<R>
where
    R: WorkspaceRepository,
{
    async fn execute(
        &self,
        token: &str,
        accepting_user_id: Uuid,
    ) -> Result<WorkspaceMember, AcceptInviteError> {
        let claims = self
            .token_codec
            .verify_for(token, TokenPurpose::WorkspaceInvite)
            .map_err(|_| AcceptInviteError::TokenInvalidOrExpired)?;

        // An invite only redeems for the account it was minted for.
        if claims.sub != accepting_user_id {
            return Err(AcceptInviteError::TokenInvalidOrExpired);
        }

        let invite = self
            .repository
            .find_invite_by_token(token)
            .await
            .map_err(|e| AcceptInviteError::RepositoryError(e.to_string()))?
            .ok_or(AcceptInviteError::TokenInvalidOrExpired)?;

        if invite.is_expired() {
            if let Err(e) = self.repository.delete_invite(invite.id).await {
                warn!(
                    invite_id = %invite.id,
                    error = %e,
                    "Failed to delete expired invite during redemption"
                );
            }
            return Err(AcceptInviteError::TokenInvalidOrExpired);
        }

        let member = self
            .repository
            .add_member(invite.workspace_id, accepting_user_id, invite.role)
            .await
            .map_err(|e| match e {
                WorkspaceRepositoryError::AlreadyMember => AcceptInviteError::AlreadyMember,
                other => AcceptInviteError::RepositoryError(other.to_string()),
            })?;

        self.repository
            .delete_invite(invite.id)
            .await
            .map_err(|e| AcceptInviteError::RepositoryError(e.to_string()))?;

        Ok(member)
    }
}
