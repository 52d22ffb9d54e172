use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::society_user_roles::{
    ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as RoleEntity,
};
use crate::membership::application::domain::entities::{RoleAssignment, SocietyUserRole};
use crate::membership::application::ports::outgoing::{
    SocietyRoleRepository, SocietyRoleRepositoryError,
};

#[derive(Clone, Debug)]
pub struct SocietyRoleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocietyRoleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocietyRoleRepository for SocietyRoleRepositoryPostgres {
    async fn upsert(
        &self,
        assignment: RoleAssignment,
    ) -> Result<SocietyUserRole, SocietyRoleRepositoryError> {
        let now = Utc::now().fixed_offset();

        let row = RoleActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(assignment.name),
            user_id: Set(assignment.user_id.value()),
            society_id: Set(assignment.society_id),
            role: Set(assignment.role.as_str().to_string()),
            group_id: Set(assignment.group_id),
            assigned_by: Set(assignment.assigned_by.value()),
            assigned_at: Set(now),
            updated_at: Set(now),
        };

        // id and assigned_at of an existing row survive the conflict
        let stored = RoleEntity::insert(row)
            .on_conflict(
                OnConflict::columns([RoleColumn::UserId, RoleColumn::SocietyId])
                    .update_columns([
                        RoleColumn::Name,
                        RoleColumn::Role,
                        RoleColumn::GroupId,
                        RoleColumn::AssignedBy,
                        RoleColumn::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| SocietyRoleRepositoryError::DatabaseError(e.to_string()))?;

        SocietyUserRole::try_from(stored).map_err(|e| {
            SocietyRoleRepositoryError::DatabaseError(format!("invalid stored row: {}", e))
        })
    }
}
