pub mod create_project;
pub mod get_project;
pub mod list_projects;

pub use create_project::create_project_handler;
pub use get_project::get_project_handler;
pub use list_projects::list_projects_handler;
