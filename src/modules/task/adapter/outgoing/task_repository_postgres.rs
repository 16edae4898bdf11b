use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::task::application::domain::entities::{Task, TaskPriority, TaskStatus};
use crate::modules::task::application::ports::outgoing::task_repository::{
    CreateTaskData, TaskRepository, TaskRepositoryError,
};

use super::sea_orm_entity::task_assignees::{
    ActiveModel as AssigneeActiveModel, Column as AssigneeColumn, Entity as AssigneeEntity,
};
use super::sea_orm_entity::tasks::{
    ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as TaskEntity,
    Model as TaskModel,
};

#[derive(Clone, Debug)]
pub struct TaskRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_task(model: TaskModel, assignees: Vec<Uuid>) -> Result<Task, TaskRepositoryError> {
        let status = TaskStatus::parse(&model.status).ok_or_else(|| {
            TaskRepositoryError::DatabaseError(format!(
                "Unknown status in task row {}: {}",
                model.id, model.status
            ))
        })?;
        let priority = TaskPriority::parse(&model.priority).ok_or_else(|| {
            TaskRepositoryError::DatabaseError(format!(
                "Unknown priority in task row {}: {}",
                model.id, model.priority
            ))
        })?;

        Ok(Task {
            id: model.id,
            project_id: model.project_id,
            title: model.title,
            description: model.description,
            status,
            priority,
            due_date: model.due_date,
            created_by: model.created_by,
            assignees,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }

    async fn assignees_for(&self, task_id: Uuid) -> Result<Vec<Uuid>, TaskRepositoryError> {
        let rows = AssigneeEntity::find()
            .filter(AssigneeColumn::TaskId.eq(task_id))
            .all(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.user_id).collect())
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryPostgres {
    async fn create_task(&self, data: CreateTaskData) -> Result<Task, TaskRepositoryError> {
        let active = TaskActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(data.project_id),
            title: Set(data.title),
            description: Set(data.description),
            status: Set(data.status.as_str().to_string()),
            priority: Set(data.priority.as_str().to_string()),
            due_date: Set(data.due_date),
            created_by: Set(data.created_by),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        let assignee_rows: Vec<AssigneeActiveModel> = data
            .assignees
            .iter()
            .map(|user_id| AssigneeActiveModel {
                id: Set(Uuid::new_v4()),
                task_id: Set(model.id),
                user_id: Set(*user_id),
            })
            .collect();

        AssigneeEntity::insert_many(assignee_rows)
            .exec(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_task(model, data.assignees)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, TaskRepositoryError> {
        let model = TaskEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        match model {
            Some(model) => {
                let assignees = self.assignees_for(model.id).await?;
                Self::map_to_task(model, assignees).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        let models = TaskEntity::find()
            .filter(TaskColumn::ProjectId.eq(project_id))
            .order_by_asc(TaskColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let task_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let assignee_rows = AssigneeEntity::find()
            .filter(AssigneeColumn::TaskId.is_in(task_ids))
            .all(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|model| {
                let assignees = assignee_rows
                    .iter()
                    .filter(|r| r.task_id == model.id)
                    .map(|r| r.user_id)
                    .collect();
                Self::map_to_task(model, assignees)
            })
            .collect()
    }

    async fn update_status(
        &self,
        task_id: Uuid,
        status: TaskStatus,
    ) -> Result<Task, TaskRepositoryError> {
        let model = TaskEntity::find_by_id(task_id)
            .one(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(TaskRepositoryError::TaskNotFound)?;

        let mut active = model.into_active_model();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| TaskRepositoryError::DatabaseError(e.to_string()))?;

        let assignees = self.assignees_for(updated.id).await?;
        Self::map_to_task(updated, assignees)
    }
}
