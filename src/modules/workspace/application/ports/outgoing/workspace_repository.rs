use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceInvite, WorkspaceMember, WorkspaceRole,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkspaceRepositoryError {
    #[error("Workspace not found")]
    WorkspaceNotFound,
    /// Unique index on (workspace_id, user_id) in the members table.
    #[error("User is already a member of this workspace")]
    AlreadyMember,
    /// Unique index on (workspace_id, user_id) in the invites table.
    #[error("User already has a pending invite to this workspace")]
    AlreadyInvited,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceData {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub owner_id: Uuid,
}

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn create_workspace(
        &self,
        data: CreateWorkspaceData,
    ) -> Result<Workspace, WorkspaceRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workspace>, WorkspaceRepositoryError>;

    /// Workspaces the user belongs to, through the members table.
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError>;

    async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> Result<WorkspaceMember, WorkspaceRepositoryError>;

    async fn find_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkspaceMember>, WorkspaceRepositoryError>;

    async fn list_members(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<WorkspaceMember>, WorkspaceRepositoryError>;

    async fn create_invite(
        &self,
        invite: WorkspaceInvite,
    ) -> Result<(), WorkspaceRepositoryError>;

    async fn find_invite_by_workspace_and_user(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkspaceInvite>, WorkspaceRepositoryError>;

    async fn find_invite_by_token(
        &self,
        token: &str,
    ) -> Result<Option<WorkspaceInvite>, WorkspaceRepositoryError>;

    async fn delete_invite(&self, invite_id: Uuid) -> Result<(), WorkspaceRepositoryError>;
}
