use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectRepository,
};
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Workspace not found")]
    WorkspaceNotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub workspace_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub created_by: Uuid,
}

#[async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, input: CreateProjectInput) -> Result<Project, CreateProjectError>;
}

/// Any workspace member may start a project. New projects default to the
/// planning status.
pub struct CreateProjectUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    repository: R,
    workspace_repository: W,
}

impl<R, W> CreateProjectUseCase<R, W>
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
impl<R, W> ICreateProjectUseCase for CreateProjectUseCase<R, W>
where
    R: ProjectRepository,
    W: WorkspaceRepository,
{
    async fn execute(&self, input: CreateProjectInput) -> Result<Project, CreateProjectError> {
        self.workspace_repository
            .find_by_id(input.workspace_id)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?
            .ok_or(CreateProjectError::WorkspaceNotFound)?;

        self.workspace_repository
            .find_member(input.workspace_id, input.created_by)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?
            .ok_or(CreateProjectError::NotAMember)?;

        self.repository
            .create_project(CreateProjectData {
                workspace_id: input.workspace_id,
                title: input.title,
                description: input.description,
                status: input.status.unwrap_or(ProjectStatus::Planning),
                start_date: input.start_date,
                due_date: input.due_date,
                created_by: input.created_by,
            })
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}
