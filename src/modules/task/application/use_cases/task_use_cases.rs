use std::sync::Arc;

use super::create_task::ICreateTaskUseCase;
use super::list_tasks::IListTasksUseCase;
use super::update_task_status::IUpdateTaskStatusUseCase;

#[derive(Clone)]
pub struct TaskUseCases {
    pub create: Arc<dyn ICreateTaskUseCase>,
    pub list: Arc<dyn IListTasksUseCase>,
    pub update_status: Arc<dyn IUpdateTaskStatusUseCase>,
}
