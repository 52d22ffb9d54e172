use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::groups::ActiveModel as GroupActiveModel;
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::outgoing::{
    GroupRepository, GroupRepositoryError, NewGroup,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct GroupRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryPostgres {
    async fn create(&self, group: NewGroup) -> Result<Group, GroupRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = GroupActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(group.user_id.value()),
            society_id: Set(group.society_id),
            name: Set(group.name.clone()),
            description: Set(group.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                GroupRepositoryError::DuplicateKey(group.name)
            } else {
                GroupRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(Group::from(model))
    }
}
