use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::task::application::domain::entities::Task;
use crate::modules::task::application::ports::outgoing::TaskRepository;
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTasksError {
    #[error("Project not found")]
    ProjectNotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListTasksUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Task>, ListTasksError>;
}

pub struct ListTasksUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    repository: R,
    project_repository: P,
    workspace_repository: W,
}

impl<R, P, W> ListTasksUseCase<R, P, W>
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
impl<R, P, W> IListTasksUseCase for ListTasksUseCase<R, P, W>
where
    R: TaskRepository,
    P: ProjectRepository,
    W: WorkspaceRepository,
{
    async fn execute(
        &self,
        project_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Task>, ListTasksError> {
        let project = self
            .project_repository
            .find_by_id(project_id)
            .await
            .map_err(|e| ListTasksError::RepositoryError(e.to_string()))?
            .ok_or(ListTasksError::ProjectNotFound)?;

        self.workspace_repository
            .find_member(project.workspace_id, requester_id)
            .await
            .map_err(|e| ListTasksError::RepositoryError(e.to_string()))?
            .ok_or(ListTasksError::NotAMember)?;

        self.repository
            .list_for_project(project_id)
            .await
            .map_err(|e| ListTasksError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
    use crate::modules::project::application::use_cases::test_support::InMemoryProjectRepository;
    use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
    use crate::modules::task::application::use_cases::test_support::InMemoryTaskRepository;
    use crate::modules::workspace::application::domain::entities::WorkspaceRole;
    use crate::modules::workspace::application::use_cases::test_support::{
        sample_workspace, InMemoryWorkspaceRepository,
    };
    use chrono::{NaiveDate, Utc};

    fn sample_project(workspace_id: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            workspace_id,
            title: "Website relaunch".to_string(),
            description: None,
            status: ProjectStatus::InProgress,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            due_date: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_task(project_id: Uuid) -> Task {
        Task {
            id: Uuid::new_v4(),
            project_id,
            title: "Draft landing page".to_string(),
            description: None,
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            created_by: Uuid::new_v4(),
            assignees: vec![Uuid::new_v4()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn member_lists_only_this_projects_tasks() {
        let member_id = Uuid::new_v4();
        let workspace = sample_workspace(Uuid::new_v4());
        let project = sample_project(workspace.id);
        let mine = sample_task(project.id);
        let foreign = sample_task(Uuid::new_v4());

        let workspaces = InMemoryWorkspaceRepository::default()
            .with_workspace(workspace.clone())
            .with_member(workspace.id, member_id, WorkspaceRole::Viewer);
        let projects = InMemoryProjectRepository::default().with_project(project.clone());
        let tasks = InMemoryTaskRepository::default()
            .with_task(mine.clone())
            .with_task(foreign);
        let use_case = ListTasksUseCase::new(tasks, projects, workspaces);

        let listed = use_case.execute(project.id, member_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);
    }

    #[tokio::test]
    async fn outsider_is_refused() {
        let workspace = sample_workspace(Uuid::new_v4());
        let project = sample_project(workspace.id);

        let workspaces =
            InMemoryWorkspaceRepository::default().with_workspace(workspace.clone());
        let projects = InMemoryProjectRepository::default().with_project(project.clone());
        let use_case = ListTasksUseCase::new(
            InMemoryTaskRepository::default(),
            projects,
            workspaces,
        );

        let result = use_case.execute(project.id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(ListTasksError::NotAMember)));
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let use_case = ListTasksUseCase::new(
            InMemoryTaskRepository::default(),
            InMemoryProjectRepository::default(),
            InMemoryWorkspaceRepository::default(),
        );
        let result = use_case.execute(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(ListTasksError::ProjectNotFound)));
    }
}
