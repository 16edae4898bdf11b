use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Project, GetProjectError>;
}

/// Membership is checked against the project's workspace, so a project id
/// from another workspace never leaks its contents.
pub struct GetProjectUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    repository: R,
    workspace_repository: W,
}

impl<R, W> GetProjectUseCase<R, W>
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
impl<R, W> IGetProjectUseCase for GetProjectUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    async fn execute(
        &self,
        project_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Project, GetProjectError> {
        let project = self
            .repository
            .find_by_id(project_id)
            .await
            .map_err(|e| GetProjectError::RepositoryError(e.to_string()))?
            .ok_or(GetProjectError::NotFound)?;

        self.workspace_repository
            .find_member(project.workspace_id, requester_id)
            .await
            .map_err(|e| GetProjectError::RepositoryError(e.to_string()))?
            .ok_or(GetProjectError::NotAMember)?;

        Ok(project)
    }
}
