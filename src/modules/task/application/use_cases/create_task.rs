use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::task::application::domain::entities::{Task, TaskPriority, TaskStatus};
use crate::modules::task::application::ports::outgoing::{CreateTaskData, TaskRepository};
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTaskError {
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Every assignee must be a workspace member")]
    AssigneeNotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: NaiveDate,
    pub created_by: Uuid,
    pub assignees: Vec<Uuid>,
}

#[async_trait]
pub trait ICreateTaskUseCase: Send + Sync {
    async fn execute(&self, input: CreateTaskInput) -> Result<Task, CreateTaskError>;
}

/// Creates a task in a project. The creator and every assignee must be
/// members of the project's workspace.
pub struct CreateTaskUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    repository: R,
    project_repository: P,
    workspace_repository: W,
}

impl<R, P, W> CreateTaskUseCase<R, P, W>
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
impl<R, P, W> ICreateTaskUseCase for CreateTaskUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    async fn execute(&self, input: CreateTaskInput) -> Result<Task, CreateTaskError> {
        let project = self
            .project_repository
            .find_by_id(input.project_id)
            .await
            .map_err(|e| CreateTaskError::RepositoryError(e.to_string()))?
            .ok_or(CreateTaskError::ProjectNotFound)?;

        self.workspace_repository
            .find_member(project.workspace_id, input.created_by)
            .await
            .map_err(|e| CreateTaskError::RepositoryError(e.to_string()))?
            .ok_or(CreateTaskError::NotAMember)?;

        for assignee in &input.assignees {
            self.workspace_repository
                .find_member(project.workspace_id, *assignee)
                .await
                .map_err(|e| CreateTaskError::RepositoryError(e.to_string()))?
                .ok_or(CreateTaskError::AssigneeNotAMember)?;
        }

        self.repository
            .create_task(CreateTaskData {
                project_id: input.project_id,
                title: input.title,
                description: input.description,
                status: input.status.unwrap_or(TaskStatus::ToDo),
                priority: input.priority.unwrap_or(TaskPriority::Medium),
                due_date: input.due_date,
                created_by: input.created_by,
                assignees: input.assignees,
            })
            .await
            .map_err(|e| CreateTaskError::RepositoryError(e.to_string()))
    }
}
