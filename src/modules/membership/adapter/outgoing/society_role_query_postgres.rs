use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::society_user_roles::{
    Column as RoleColumn, Entity as RoleEntity, Model as RoleModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::SocietyUserRole;
use crate::membership::application::ports::outgoing::{SocietyRoleQuery, SocietyRoleQueryError};

#[derive(Clone, Debug)]
pub struct SocietyRoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocietyRoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: RoleModel) -> Result<SocietyUserRole, SocietyRoleQueryError> {
        SocietyUserRole::try_from(model)
            .map_err(|e| SocietyRoleQueryError::InvalidRecord(e.to_string()))
    }
}

#[async_trait]
impl SocietyRoleQuery for SocietyRoleQueryPostgres {
    async fn find_role(
        &self,
        user_id: UserId,
        society_id: Uuid,
    ) -> Result<Option<SocietyUserRole>, SocietyRoleQueryError> {
        RoleEntity::find()
            .filter(RoleColumn::UserId.eq(user_id.value()))
            .filter(RoleColumn::SocietyId.eq(society_id))
            .one(&*self.db)
            .await
            .map_err(|e| SocietyRoleQueryError::DatabaseError(e.to_string()))?
            .map(Self::map_model)
            .transpose()
    }

    async fn list_by_society(
        &self,
        society_id: Uuid,
    ) -> Result<Vec<SocietyUserRole>, SocietyRoleQueryError> {
        RoleEntity::find()
            .filter(RoleColumn::SocietyId.eq(society_id))
            .order_by_asc(RoleColumn::AssignedAt)
            .all(&*self.db)
            .await
            .map_err(|e| SocietyRoleQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Self::map_model)
            .collect()
    }
}
