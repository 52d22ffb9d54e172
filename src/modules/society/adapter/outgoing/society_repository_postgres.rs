use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::societies::{Column as SocietyColumn, Entity as SocietyEntity};
use crate::society::application::domain::entities::{Society, SocietyStatus};
use crate::society::application::ports::outgoing::{SocietyRepository, SocietyRepositoryError};

#[derive(Clone, Debug)]
pub struct SocietyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocietyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocietyRepository for SocietyRepositoryPostgres {
    async fn update_status(
        &self,
        society_id: Uuid,
        status: SocietyStatus,
    ) -> Result<Society, SocietyRepositoryError> {
        let now = Utc::now().fixed_offset();

        let guarded = SocietyEntity::update_many()
            .col_expr(SocietyColumn::Status, Expr::value(status.as_str()))
            .col_expr(SocietyColumn::UpdatedAt, Expr::value(now))
            .filter(SocietyColumn::Id.eq(society_id))
            .filter(SocietyColumn::Status.ne(SocietyStatus::Deleted.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|e| SocietyRepositoryError::DatabaseError(e.to_string()))?;

        let stored = SocietyEntity::find_by_id(society_id)
            .one(&*self.db)
            .await
            .map_err(|e| SocietyRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(SocietyRepositoryError::SocietyNotFound)?;

        if guarded.rows_affected == 0 {
            tracing::warn!(society_id = %society_id, "Status write lost to a deletion");
            return Err(SocietyRepositoryError::AlreadyDeleted);
        }

        Society::try_from(stored).map_err(|e| SocietyRepositoryError::DatabaseError(e.to_string()))
    }
}
