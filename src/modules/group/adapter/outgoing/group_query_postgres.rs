use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::groups::{Column as GroupColumn, Entity as GroupEntity};
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::outgoing::{GroupQuery, GroupQueryError};

#[derive(Clone, Debug)]
pub struct GroupQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupQuery for GroupQueryPostgres {
    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<Group>, GroupQueryError> {
        let group = GroupEntity::find_by_id(group_id)
            .one(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(group.map(Group::from))
    }

    async fn list_by_society(&self, society_id: Uuid) -> Result<Vec<Group>, GroupQueryError> {
        let groups = GroupEntity::find()
            .filter(GroupColumn::SocietyId.eq(society_id))
            .order_by_asc(GroupColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        Ok(groups.into_iter().map(Group::from).collect())
    }
}
