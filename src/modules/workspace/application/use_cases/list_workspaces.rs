use crate::modules::workspace::application::domain::entities::Workspace;
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListWorkspacesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListWorkspacesUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Workspace>, ListWorkspacesError>;
}

pub struct ListWorkspacesUseCase<R>
where
    R: WorkspaceRepository,
{
    repository: R,
}

impl<R> ListWorkspacesUseCase<R>
where
    R: WorkspaceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListWorkspacesUseCase for ListWorkspacesUseCase<R>
where
    R: WorkspaceRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Workspace>, ListWorkspacesError> {
        self.repository
            .list_for_user(user_id)
            .await
            .map_err(|e| ListWorkspacesError::RepositoryError(e.to_string()))
    }
}
