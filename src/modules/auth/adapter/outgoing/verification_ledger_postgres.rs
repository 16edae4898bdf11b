use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{TokenPurpose, VerificationRecord};
use crate::modules::auth::application::ports::outgoing::verification_ledger::{
    VerificationLedger, VerificationLedgerError,
};

use super::sea_orm_entity::verifications::{
    ActiveModel as VerificationActiveModel, Column as VerificationColumn,
    Entity as VerificationEntity, Model as VerificationModel,
};

#[derive(Clone, Debug)]
pub struct VerificationLedgerPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationLedgerPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: VerificationModel) -> Result<VerificationRecord, VerificationLedgerError> {
        let purpose = TokenPurpose::parse(&model.purpose).ok_or_else(|| {
            VerificationLedgerError::DatabaseError(format!(
                "Unknown purpose in verification row {}: {}",
                model.id, model.purpose
            ))
        })?;

        Ok(VerificationRecord {
            id: model.id,
            user_id: model.user_id,
            token: model.token,
            purpose,
            expires_at: model.expires_at.with_timezone(&Utc),
            created_at: model.created_at.with_timezone(&Utc),
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
impl VerificationLedger for VerificationLedgerPostgres {
    async fn find_by_user_and_purpose(
        &self,
        user_id: Uuid,
        purpose: TokenPurpose,
    ) -> Result<Option<VerificationRecord>, VerificationLedgerError> {
        let model = VerificationEntity::find()
            .filter(VerificationColumn::UserId.eq(user_id))
            .filter(VerificationColumn::Purpose.eq(purpose.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| VerificationLedgerError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_record).transpose()
    }

    async fn find_by_user_and_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<VerificationRecord>, VerificationLedgerError> {
        let model = VerificationEntity::find()
            .filter(VerificationColumn::UserId.eq(user_id))
            .filter(VerificationColumn::Token.eq(token))
            .one(&*self.db)
            .await
            .map_err(|e| VerificationLedgerError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_record).transpose()
    }

    async fn create(&self, record: VerificationRecord) -> Result<(), VerificationLedgerError> {
        let active = VerificationActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            token: Set(record.token),
            purpose: Set(record.purpose.as_str().to_string()),
            expires_at: Set(record.expires_at.into()),
            created_at: NotSet,
        };

        active.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return VerificationLedgerError::ActiveRecordExists;
            }
            VerificationLedgerError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn delete_by_id(&self, record_id: Uuid) -> Result<(), VerificationLedgerError> {
        VerificationEntity::delete_by_id(record_id)
            .exec(&*self.db)
            .await
            .map_err(|e| VerificationLedgerError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<(), VerificationLedgerError> {
        VerificationEntity::delete_many()
            .filter(VerificationColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| VerificationLedgerError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
