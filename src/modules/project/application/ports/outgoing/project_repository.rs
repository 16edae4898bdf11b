use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub workspace_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub created_by: Uuid,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;

    async fn list_for_workspace(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<Project>, ProjectRepositoryError>;
}
