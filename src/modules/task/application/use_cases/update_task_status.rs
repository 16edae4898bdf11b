use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::task::application::domain::entities::{Task, TaskStatus};
use crate::modules::task::application::ports::outgoing::{TaskRepository, TaskRepositoryError};
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTaskStatusError {
    #[error("Task not found")]
    TaskNotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateTaskStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        task_id: Uuid,
        status: TaskStatus,
        requester_id: Uuid,
    ) -> Result<Task, UpdateTaskStatusError>;
}

/// Any workspace member may move a task between statuses.
pub struct UpdateTaskStatusUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    repository: R,
    project_repository: P,
    workspace_repository: W,
}

impl<R, P, W> UpdateTaskStatusUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    pub fn new(repository: R, project_repository: P, workspace_repository: W) -> Self {
        Self {
            repository,
            project_repository,
            workspace_repository,
        }
    }
}

#[async_trait]
impl<R, P, W> IUpdateTaskStatusUseCase for UpdateTaskStatusUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    async fn execute(
        &self,
        task_id: Uuid,
        status: TaskStatus,
        requester_id: Uuid,
    ) -> Result<Task, UpdateTaskStatusError> {
        let task = self
            .repository
            .find_by_id(task_id)
            .await
            .map_err(|e| UpdateTaskStatusError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTaskStatusError::TaskNotFound)?;

        let project = self
            .project_repository
            .find_by_id(task.project_id)
            .await
            .map_err(|e| UpdateTaskStatusError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTaskStatusError::TaskNotFound)?;

        self.workspace_repository
            .find_member(project.workspace_id, requester_id)
            .await
            .map_err(|e| UpdateTaskStatusError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTaskStatusError::NotAMember)?;

        self.repository
            .update_status(task_id, status)
            .await
            .map_err(|e| match e {
                TaskRepositoryError::TaskNotFound => UpdateTaskStatusError::TaskNotFound,
                other => UpdateTaskStatusError::RepositoryError(other.to_string()),
            })
    }
}
