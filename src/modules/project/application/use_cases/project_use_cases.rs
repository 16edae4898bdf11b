use std::sync::Arc;

use super::create_project::ICreateProjectUseCase;
use super::get_project::IGetProjectUseCase;
use super::list_projects::IListProjectsUseCase;

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn ICreateProjectUseCase>,
    pub list: Arc<dyn IListProjectsUseCase>,
    pub get: Arc<dyn IGetProjectUseCase>,
}
