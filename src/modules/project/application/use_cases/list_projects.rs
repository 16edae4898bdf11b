use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Workspace not found")]
    WorkspaceNotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        workspace_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Project>, ListProjectsError>;
}

pub struct ListProjectsUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    repository: R,
    workspace_repository: W,
}

impl<R, W> ListProjectsUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    pub fn new(repository: R, workspace_repository: W) -> Self {
        Self {
            repository,
            workspace_repository,
        }
    }
}

#[async_trait]
impl<R, W> IListProjectsUseCase for ListProjectsUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    async fn execute(
        &self,
        workspace_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Project>, ListProjectsError> {
        self.workspace_repository
            .find_by_id(workspace_id)
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))?
            .ok_or(ListProjectsError::WorkspaceNotFound)?;

        self.workspace_repository
            .find_member(workspace_id, requester_id)
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))?
            .ok_or(ListProjectsError::NotAMember)?;

        self.repository
            .list_for_workspace(workspace_id)
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))
    }
}
