pub mod create_project;
pub mod get_project;
pub mod list_projects;
pub mod project_use_cases;

#[cfg(test)]
pub mod test_support;
