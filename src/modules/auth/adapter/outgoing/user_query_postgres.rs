use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            name: model.name,
            password_hash: model.password_hash,
            is_email_verified: model.is_email_verified,
            last_login_at: model.last_login_at.map(|t| t.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_user))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_user))
    }
}
