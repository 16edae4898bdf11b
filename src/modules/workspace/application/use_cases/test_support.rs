//! Shared in-memory repository for workspace use case tests. Mirrors the
//! unique indexes the real table enforces.

use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceInvite, WorkspaceMember, WorkspaceRole,
};
use crate::modules::workspace::application::ports::outgoing::{
    CreateWorkspaceData, WorkspaceRepository, WorkspaceRepositoryError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct State {
    workspaces: Vec<Workspace>,
    members: Vec<WorkspaceMember>,
    invites: Vec<WorkspaceInvite>,
}

#[derive(Default, Clone)]
pub struct InMemoryWorkspaceRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryWorkspaceRepository {
    pub fn with_workspace(self, workspace: Workspace) -> Self {
        self.state.lock().unwrap().workspaces.push(workspace);
        self
    }

    pub fn with_member(self, workspace_id: Uuid, user_id: Uuid, role: WorkspaceRole) -> Self {
        self.state.lock().unwrap().members.push(WorkspaceMember {
            id: Uuid::new_v4(),
            workspace_id,
            user_id,
            role,
            joined_at: Utc::now(),
        });
        self
    }

    pub fn with_invite(self, invite: WorkspaceInvite) -> Self {
        self.state.lock().unwrap().invites.push(invite);
        self
    }

    pub fn invites(&self) -> Vec<WorkspaceInvite> {
        self.state.lock().unwrap().invites.clone()
    }

    pub fn members(&self) -> Vec<WorkspaceMember> {
        self.state.lock().unwrap().members.clone()
    }
}

pub fn sample_workspace(owner_id: Uuid) -> Workspace {
    Workspace {
        id: Uuid::new_v4(),
        name: "Sample".to_string(),
        description: None,
        color: "#FF5733".to_string(),
        owner_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn create_workspace(
        &self,
        data: CreateWorkspaceData,
    ) -> Result<Workspace, WorkspaceRepositoryError> {
        let workspace = Workspace {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            color: data.color,
            owner_id: data.owner_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state.lock().unwrap().workspaces.push(workspace.clone());
        Ok(workspace)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workspace>, WorkspaceRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .workspaces
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .workspaces
            .iter()
            .filter(|w| {
                state
                    .members
                    .iter()
                    .any(|m| m.workspace_id == w.id && m.user_id == user_id)
            })
            .cloned()
            .collect())
    }

    async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> Result<WorkspaceMember, WorkspaceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state
            .members
            .iter()
            .any(|m| m.workspace_id == workspace_id && m.user_id == user_id)
        {
            return Err(WorkspaceRepositoryError::AlreadyMember);
        }
        let member = WorkspaceMember {
            id: Uuid::new_v4(),
            workspace_id,
            user_id,
            role,
            joined_at: Utc::now(),
        };
        state.members.push(member.clone());
        Ok(member)
    }

    async fn find_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkspaceMember>, WorkspaceRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .members
            .iter()
            .find(|m| m.workspace_id == workspace_id && m.user_id == user_id)
            .cloned())
    }

    async fn list_members(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<WorkspaceMember>, WorkspaceRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .members
            .iter()
            .filter(|m| m.workspace_id == workspace_id)
            .cloned()
            .collect())
    }

    async fn create_invite(
        &self,
        invite: WorkspaceInvite,
    ) -> Result<(), WorkspaceRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state
            .invites
            .iter()
            .any(|i| i.workspace_id == invite.workspace_id && i.user_id == invite.user_id)
        {
            return Err(WorkspaceRepositoryError::AlreadyInvited);
        }
        state.invites.push(invite);
        Ok(())
    }

    async fn find_invite_by_workspace_and_user(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkspaceInvite>, WorkspaceRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .invites
            .iter()
            .find(|i| i.workspace_id == workspace_id && i.user_id == user_id)
            .cloned())
    }

    async fn find_invite_by_token(
        &self,
        token: &str,
    ) -> Result<Option<WorkspaceInvite>, WorkspaceRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .invites
            .iter()
            .find(|i| i.token == token)
            .cloned())
    }

    async fn delete_invite(&self, invite_id: Uuid) -> Result<(), WorkspaceRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .invites
            .retain(|i| i.id != invite_id);
        Ok(())
    }
}
