//! Shared in-memory repository for project use case tests.

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn with_project(self, project: Project) -> Self {
        self.projects.lock().unwrap().push(project);
        self
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let project = Project {
            id: Uuid::new_v4(),
            workspace_id: data.workspace_id,
            title: data.title,
            description: data.description,
            status: data.status,
            start_date: data.start_date,
            due_date: data.due_date,
            created_by: data.created_by,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_for_workspace(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.workspace_id == workspace_id)
            .cloned()
            .collect())
    }
}
