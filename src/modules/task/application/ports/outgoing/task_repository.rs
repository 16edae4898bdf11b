use crate::modules::task::application::domain::entities::{Task, TaskPriority, TaskStatus};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskRepositoryError {
    #[error("Task not found")]
    TaskNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateTaskData {
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
    pub created_by: Uuid,
    pub assignees: Vec<Uuid>,
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts the task and its assignee rows together.
    async fn create_task(&self, data: CreateTaskData) -> Result<Task, TaskRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, TaskRepositoryError>;

    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<Task>, TaskRepositoryError>;

    async fn update_status(
        &self,
        task_id: Uuid,
        status: TaskStatus,
    ) -> Result<Task, TaskRepositoryError>;
}
