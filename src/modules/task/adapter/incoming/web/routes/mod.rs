pub mod create_task;
pub mod list_tasks;
pub mod update_task_status;

pub use create_task::create_task_handler;
pub use list_tasks::list_tasks_handler;
pub use update_task_status::update_task_status_handler;
