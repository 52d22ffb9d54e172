use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::societies::ActiveModel as SocietyActiveModel;
use super::sea_orm_entity::society_requests::{
    ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::membership::adapter::outgoing::sea_orm_entity::society_user_roles::ActiveModel as RoleActiveModel;
use crate::membership::application::domain::entities::{SocietyRole, SocietyUserRole};
use crate::shared::db::is_unique_violation;
use crate::society::application::domain::entities::{
    Society, SocietyRequest, SocietyRequestStatus, SocietyStatus,
};
use crate::society::application::ports::outgoing::{
    ApprovedSocietyRequest, NewSocietyRequest, SocietyRequestRepository,
    SocietyRequestRepositoryError,
};

#[derive(Clone, Debug)]
pub struct SocietyRequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocietyRequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SocietyRequestRepositoryError {
        SocietyRequestRepositoryError::DatabaseError(e.to_string())
    }

    fn invalid_row(e: impl std::fmt::Display) -> SocietyRequestRepositoryError {
        SocietyRequestRepositoryError::DatabaseError(format!("invalid stored row: {}", e))
    }

    /// The three writes of an approval. The caller owns commit and rollback.
    async fn approve_in(
        txn: &DatabaseTransaction,
        request: &SocietyRequest,
        president_name: &str,
        approved_by: UserId,
        now: DateTime<FixedOffset>,
    ) -> Result<ApprovedSocietyRequest, SocietyRequestRepositoryError> {
        let guarded = RequestEntity::update_many()
            .col_expr(
                RequestColumn::Status,
                Expr::value(SocietyRequestStatus::Approved.as_str()),
            )
            .col_expr(RequestColumn::UpdatedAt, Expr::value(now))
            .filter(RequestColumn::Id.eq(request.id))
            .filter(RequestColumn::Status.eq(SocietyRequestStatus::Pending.as_str()))
            .exec(txn)
            .await
            .map_err(Self::map_db_err)?;

        if guarded.rows_affected == 0 {
            return Err(SocietyRequestRepositoryError::AlreadyResolved);
        }

        let society = SocietyActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.society_name.clone()),
            description: Set(request.description.clone()),
            status: Set(SocietyStatus::Active.as_str().to_string()),
            created_by: Set(request.user_id.value()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return SocietyRequestRepositoryError::DuplicateKey(request.society_name.clone());
            }
            Self::map_db_err(e)
        })?;

        let president = RoleActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(president_name.to_string()),
            user_id: Set(request.user_id.value()),
            society_id: Set(society.id),
            role: Set(SocietyRole::President.as_str().to_string()),
            group_id: Set(None),
            assigned_by: Set(approved_by.value()),
            assigned_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(Self::map_db_err)?;

        let mut approved = request.clone();
        approved.status = SocietyRequestStatus::Approved;
        approved.updated_at = now.with_timezone(&Utc);

        Ok(ApprovedSocietyRequest {
            request: approved,
            society: Society::try_from(society).map_err(Self::invalid_row)?,
            president: SocietyUserRole::try_from(president).map_err(Self::invalid_row)?,
        })
    }
}

#[async_trait]
impl SocietyRequestRepository for SocietyRequestRepositoryPostgres {
    async fn create_request(
        &self,
        data: NewSocietyRequest,
    ) -> Result<SocietyRequest, SocietyRequestRepositoryError> {
        let now = Utc::now().fixed_offset();

        let inserted = RequestActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            society_name: Set(data.society_name),
            description: Set(data.description),
            status: Set(SocietyRequestStatus::Pending.as_str().to_string()),
            rejection_reason: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        SocietyRequest::try_from(inserted).map_err(Self::invalid_row)
    }

    async fn find_by_id(
        &self,
        request_id: Uuid,
    ) -> Result<Option<SocietyRequest>, SocietyRequestRepositoryError> {
        RequestEntity::find_by_id(request_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| SocietyRequest::try_from(m).map_err(Self::invalid_row))
            .transpose()
    }

    async fn approve(
        &self,
        request: &SocietyRequest,
        president_name: &str,
        approved_by: UserId,
    ) -> Result<ApprovedSocietyRequest, SocietyRequestRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::approve_in(&txn, request, president_name, approved_by, now).await {
            Ok(approved) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(approved)
            }
            Err(err) => {
                let _ = txn.rollback().await;
                Err(err)
            }
        }
    }

    async fn reject(
        &self,
        request_id: Uuid,
        reason: &str,
    ) -> Result<SocietyRequest, SocietyRequestRepositoryError> {
        let now = Utc::now().fixed_offset();

        let guarded = RequestEntity::update_many()
            .col_expr(
                RequestColumn::Status,
                Expr::value(SocietyRequestStatus::Rejected.as_str()),
            )
            .col_expr(RequestColumn::RejectionReason, Expr::value(reason.to_string()))
            .col_expr(RequestColumn::UpdatedAt, Expr::value(now))
            .filter(RequestColumn::Id.eq(request_id))
            .filter(RequestColumn::Status.eq(SocietyRequestStatus::Pending.as_str()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let current = self.find_by_id(request_id).await?;

        match current {
            None => Err(SocietyRequestRepositoryError::RequestNotFound),
            Some(_) if guarded.rows_affected == 0 => {
                Err(SocietyRequestRepositoryError::AlreadyResolved)
            }
            Some(request) => Ok(request),
        }
    }
}
