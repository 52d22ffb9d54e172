use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::societies::{
    Column as SocietyColumn, Entity as SocietyEntity, Model as SocietyModel,
};
use crate::society::application::domain::entities::{Society, SocietyStatus};
use crate::society::application::ports::outgoing::{SocietyQuery, SocietyQueryError};

#[derive(Clone, Debug)]
pub struct SocietyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocietyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: Option<SocietyModel>) -> Result<Option<Society>, SocietyQueryError> {
        model
            .map(|m| {
                Society::try_from(m).map_err(|e| SocietyQueryError::InvalidRecord(e.to_string()))
            })
            .transpose()
    }
}

#[async_trait]
impl SocietyQuery for SocietyQueryPostgres {
    async fn find_by_id(&self, society_id: Uuid) -> Result<Option<Society>, SocietyQueryError> {
        let society = SocietyEntity::find_by_id(society_id)
            .one(&*self.db)
            .await
            .map_err(|e| SocietyQueryError::DatabaseError(e.to_string()))?;

        Self::map_model(society)
    }

    async fn live_name_exists(&self, name: &str) -> Result<bool, SocietyQueryError> {
        let existing = SocietyEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(SocietyColumn::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .filter(SocietyColumn::Status.ne(SocietyStatus::Deleted.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| SocietyQueryError::DatabaseError(e.to_string()))?;

        Ok(existing.is_some())
    }
}
