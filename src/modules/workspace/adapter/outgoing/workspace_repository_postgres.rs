use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::workspace::application::domain::entities::{
    Workspace, WorkspaceInvite, WorkspaceMember, WorkspaceRole,
};
use crate::modules::workspace::application::ports::outgoing::workspace_repository::{
    CreateWorkspaceData, WorkspaceRepository, WorkspaceRepositoryError,
};

use super::sea_orm_entity::workspace_invites::{
    ActiveModel as InviteActiveModel, Column as InviteColumn, Entity as InviteEntity,
    Model as InviteModel,
};
use super::sea_orm_entity::workspace_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as MemberEntity,
    Model as MemberModel,
};
use super::sea_orm_entity::workspaces::{
    ActiveModel as WorkspaceActiveModel, Column as WorkspaceColumn, Entity as WorkspaceEntity,
    Model as WorkspaceModel,
};

#[derive(Clone, Debug)]
pub struct WorkspaceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkspaceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_workspace(model: WorkspaceModel) -> Workspace {
        Workspace {
            id: model.id,
            name: model.name,
            description: model.description,
            color: model.color,
            owner_id: model.owner_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn map_to_member(model: MemberModel) -> Result<WorkspaceMember, WorkspaceRepositoryError> {
        let role = Self::parse_role(&model.role, model.id)?;
        Ok(WorkspaceMember {
            id: model.id,
            workspace_id: model.workspace_id,
            user_id: model.user_id,
            role,
            joined_at: model.joined_at.with_timezone(&Utc),
        })
    }

    fn map_to_invite(model: InviteModel) -> Result<WorkspaceInvite, WorkspaceRepositoryError> {
        let role = Self::parse_role(&model.role, model.id)?;
        Ok(WorkspaceInvite {
            id: model.id,
            workspace_id: model.workspace_id,
            user_id: model.user_id,
            token: model.token,
            role,
            expires_at: model.expires_at.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
        })
    }

    fn parse_role(value: &str, row_id: Uuid) -> Result<WorkspaceRole, WorkspaceRepositoryError> {
        WorkspaceRole::parse(value).ok_or_else(|| {
            WorkspaceRepositoryError::DatabaseError(format!(
                "Unknown role in row {}: {}",
                row_id, value
            ))
        })
    }

    fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        let err_str = err.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }
}

#[async_trait]
impl WorkspaceRepository for WorkspaceRepositoryPostgres {
    async fn create_workspace(
        &self,
        data: CreateWorkspaceData,
    ) -> Result<Workspace, WorkspaceRepositoryError> {
        let active = WorkspaceActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            color: Set(data.color),
            owner_id: Set(data.owner_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_workspace(model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workspace>, WorkspaceRepositoryError> {
        let model = WorkspaceEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_workspace))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError> {
        let memberships = MemberEntity::find()
            .filter(MemberColumn::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        if memberships.is_empty() {
            return Ok(Vec::new());
        }

        let workspace_ids: Vec<Uuid> = memberships.iter().map(|m| m.workspace_id).collect();
        let models = WorkspaceEntity::find()
            .filter(WorkspaceColumn::Id.is_in(workspace_ids))
            .order_by_asc(WorkspaceColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Self::map_to_workspace).collect())
    }

    async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> Result<WorkspaceMember, WorkspaceRepositoryError> {
        let active = MemberActiveModel {
            id: Set(Uuid::new_v4()),
            workspace_id: Set(workspace_id),
            user_id: Set(user_id),
            role: Set(role.as_str().to_string()),
            joined_at: NotSet,
        };

        let model = active.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return WorkspaceRepositoryError::AlreadyMember;
            }
            WorkspaceRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::map_to_member(model)
    }

    async fn find_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkspaceMember>, WorkspaceRepositoryError> {
        let model = MemberEntity::find()
            .filter(MemberColumn::WorkspaceId.eq(workspace_id))
            .filter(MemberColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_member).transpose()
    }

    async fn list_members(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<WorkspaceMember>, WorkspaceRepositoryError> {
        let models = MemberEntity::find()
            .filter(MemberColumn::WorkspaceId.eq(workspace_id))
            .order_by_asc(MemberColumn::JoinedAt)
            .all(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_to_member).collect()
    }

    async fn create_invite(
        &self,
        invite: WorkspaceInvite,
    ) -> Result<(), WorkspaceRepositoryError> {
        let active = InviteActiveModel {
            id: Set(invite.id),
            workspace_id: Set(invite.workspace_id),
            user_id: Set(invite.user_id),
            token: Set(invite.token),
            role: Set(invite.role.as_str().to_string()),
            expires_at: Set(invite.expires_at.into()),
            created_at: NotSet,
        };

        active.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return WorkspaceRepositoryError::AlreadyInvited;
            }
            WorkspaceRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn find_invite_by_workspace_and_user(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkspaceInvite>, WorkspaceRepositoryError> {
        let model = InviteEntity::find()
            .filter(InviteColumn::WorkspaceId.eq(workspace_id))
            .filter(InviteColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_invite).transpose()
    }

    async fn find_invite_by_token(
        &self,
        token: &str,
    ) -> Result<Option<WorkspaceInvite>, WorkspaceRepositoryError> {
        let model = InviteEntity::find()
            .filter(InviteColumn::Token.eq(token))
            .one(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_invite).transpose()
    }

    async fn delete_invite(&self, invite_id: Uuid) -> Result<(), WorkspaceRepositoryError> {
        InviteEntity::delete_by_id(invite_id)
            .exec(&*self.db)
            .await
            .map_err(|e| WorkspaceRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
