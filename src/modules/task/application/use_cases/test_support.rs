//! Shared in-memory repository for task use case tests.

use crate::modules::task::application::domain::entities::{Task, TaskStatus};
use crate::modules::task::application::ports::outgoing::{
    CreateTaskData, TaskRepository, TaskRepositoryError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<Mutex<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    pub fn with_task(self, task: Task) -> Self {
        self.tasks.lock().unwrap().push(task);
        self
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create_task(&self, data: CreateTaskData) -> Result<Task, TaskRepositoryError> {
        let task = Task {
            id: Uuid::new_v4(),
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_by: data.created_by,
            assignees: data.assignees,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        task_id: Uuid,
        status: TaskStatus,
    ) -> Result<Task, TaskRepositoryError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(TaskRepositoryError::TaskNotFound)?;
        task.status = status;
        task.updated_at = Utc::now();
        Ok(task.clone())
    }
}
