use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceMember,
};
use crate::modules::workspace::application::ports::outgoing::WorkspaceRepository;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetWorkspaceError {
    #[error("Workspace not found")]
    NotFound,
    #[error("Not a member of this workspace")]
    NotAMember,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct WorkspaceDetail {
    pub workspace: Workspace,
    pub members: Vec<WorkspaceMember>,
}

#[async_trait]
pub trait IGetWorkspaceUseCase: Send + Sync {
    async fn execute(
        &self,
        workspace_id: Uuid,
        requester_id: Uuid,
    ) -> Result<WorkspaceDetail, GetWorkspaceError>;
}

pub struct GetWorkspaceUseCase<R>
where
    R: WorkspaceRepository,
{
    repository: R,
}

impl<R> GetWorkspaceUseCase<R>
where
    R: WorkspaceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetWorkspaceUseCase for GetWorkspaceUseCase<R>
where
    R: WorkspaceRepository,
{
    async fn execute(
        &self,
        workspace_id: Uuid,
        requester_id: Uuid,
    ) -> Result<WorkspaceDetail, GetWorkspaceError> {
        let workspace = self
            .repository
            .find_by_id(workspace_id)
            .await
            .map_err(|e| GetWorkspaceError::RepositoryError(e.to_string()))?
            .ok_or(GetWorkspaceError::NotFound)?;

        self.repository
            .find_member(workspace_id, requester_id)
            .await
            .map_err(|e| GetWorkspaceError::RepositoryError(e.to_string()))?
            .ok_or(GetWorkspaceError::NotAMember)?;

        let members = self
            .repository
            .list_members(workspace_id)
            .await
            .map_err(|e| GetWorkspaceError::RepositoryError(e.to_string()))?;

        Ok(WorkspaceDetail { workspace, members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::workspace::application::domain::entities::WorkspaceRole;
    use crate::modules::workspace::application::use_cases::test_support::{
        sample_workspace, InMemoryWorkspaceRepository,
    };

    #[tokio::test]
    async fn member_sees_the_workspace_and_its_roster() {
        let owner_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();
        let workspace = sample_workspace(owner_id);

        let repo = InMemoryWorkspaceRepository::default()
            .with_workspace(workspace.clone())
            .with_member(workspace.id, owner_id, WorkspaceRole::Owner)
            .with_member(workspace.id, member_id, WorkspaceRole::Viewer);

        let use_case = GetWorkspaceUseCase::new(repo);
        let detail = use_case.execute(workspace.id, member_id).await.unwrap();

        assert_eq!(detail.workspace.id, workspace.id);
        assert_eq!(detail.members.len(), 2);
    }

    #[tokio::test]
    async fn outsider_is_refused() {
        let workspace = sample_workspace(Uuid::new_v4());
        let repo = InMemoryWorkspaceRepository::default().with_workspace(workspace.clone());

        let use_case = GetWorkspaceUseCase::new(repo);
        let result = use_case.execute(workspace.id, Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetWorkspaceError::NotAMember)));
    }

    #[tokio::test]
    async fn missing_workspace_is_not_found() {
        let use_case = GetWorkspaceUseCase::new(InMemoryWorkspaceRepository::default());
        let result = use_case.execute(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetWorkspaceError::NotFound)));
    }
}
