pub mod create_task;
pub mod list_tasks;
pub mod task_use_cases;
pub mod update_task_status;

#[cfg(test)]
pub mod test_support;
