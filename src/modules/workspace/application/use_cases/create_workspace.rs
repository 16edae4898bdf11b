use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceRole, DEFAULT_WORKSPACE_COLOR,
};
use crate::modules::workspace::application::ports::outgoing::{
    CreateWorkspaceData, WorkspaceRepository,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateWorkspaceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceInput {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub owner_id: Uuid,
}

#[async_trait]
pub trait ICreateWorkspaceUseCase: Send + Sync {
    async fn execute(
        &self,
        input: CreateWorkspaceInput,
    ) -> Result<Workspace, CreateWorkspaceError>;
}

/// Creates the workspace and seats the creator as its owner member in the
/// same flow, so a workspace is never without an owner row.
pub struct CreateWorkspaceUseCase<R>
where
    R: WorkspaceRepository,
{
    repository: R,
}

impl<R> CreateWorkspaceUseCase<R>
where
    R: WorkspaceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateWorkspaceUseCase for CreateWorkspaceUseCase<R>
where
    R: WorkspaceRepository,
{
    async fn execute(
        &self,
        input: CreateWorkspaceInput,
    ) -> Result<Workspace, CreateWorkspaceError> {
        let workspace = self
            .repository
            .create_workspace(CreateWorkspaceData {
                name: input.name,
                description: input.description,
                color: input
                    .color
                    .unwrap_or_else(|| DEFAULT_WORKSPACE_COLOR.to_string()),
                owner_id: input.owner_id,
            })
            .await
            .map_err(|e| CreateWorkspaceError::RepositoryError(e.to_string()))?;

        self.repository
            .add_member(workspace.id, input.owner_id, WorkspaceRole::Owner)
            .await
            .map_err(|e| CreateWorkspaceError::RepositoryError(e.to_string()))?;

        Ok(workspace)
    }
}
