use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};

use super::sea_orm_entity::projects::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Model as ProjectModel,
};

#[derive(Clone, Debug)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_project(model: ProjectModel) -> Result<Project, ProjectRepositoryError> {
        let status = ProjectStatus::parse(&model.status).ok_or_else(|| {
            ProjectRepositoryError::DatabaseError(format!(
                "Unknown status in project row {}: {}",
                model.id, model.status
            ))
        })?;

        Ok(Project {
            id: model.id,
            workspace_id: model.workspace_id,
            title: model.title,
            description: model.description,
            status,
            start_date: model.start_date,
            due_date: model.due_date,
            created_by: model.created_by,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let active = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            workspace_id: Set(data.workspace_id),
            title: Set(data.title),
            description: Set(data.description),
            status: Set(data.status.as_str().to_string()),
            start_date: Set(data.start_date),
            due_date: Set(data.due_date),
            created_by: Set(data.created_by),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_project(model)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        let model = ProjectEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_project).transpose()
    }

    async fn list_for_workspace(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = ProjectEntity::find()
            .filter(ProjectColumn::WorkspaceId.eq(workspace_id))
            .order_by_asc(ProjectColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_to_project).collect()
    }
}
