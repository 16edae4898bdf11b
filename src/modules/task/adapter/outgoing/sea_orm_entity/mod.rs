pub mod task_assignees;
pub mod tasks;
