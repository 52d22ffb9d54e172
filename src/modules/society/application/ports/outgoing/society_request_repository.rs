use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::SocietyUserRole;
use crate::society::application::domain::entities::{Society, SocietyRequest};

#[derive(Debug, Clone)]
pub struct NewSocietyRequest {
    pub user_id: UserId,
    pub society_name: String,
    pub description: Option<String>,
}

/// Everything written by a successful approval.
#[derive(Debug, Clone)]
pub struct ApprovedSocietyRequest {
    pub request: SocietyRequest,
    pub society: Society,
    pub president: SocietyUserRole,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocietyRequestRepositoryError {
    #[error("Society name '{0}' is already taken")]
    DuplicateKey(String),

    #[error("Society request not found")]
    RequestNotFound,

    #[error("Society request is no longer pending")]
    AlreadyResolved,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocietyRequestRepository: Send + Sync {
    async fn create_request(
        &self,
        data: NewSocietyRequest,
    ) -> Result<SocietyRequest, SocietyRequestRepositoryError>;

    async fn find_by_id(
        &self,
        request_id: Uuid,
    ) -> Result<Option<SocietyRequest>, SocietyRequestRepositoryError>;

    /// Marks the request APPROVED, provisions the society and makes the
    /// requester its PRESIDENT in one transaction. Nothing is written when any
    /// step fails.
    async fn approve(
        &self,
        request: &SocietyRequest,
        president_name: &str,
        approved_by: UserId,
    ) -> Result<ApprovedSocietyRequest, SocietyRequestRepositoryError>;

    /// Only a PENDING row is updated.
    async fn reject(
        &self,
        request_id: Uuid,
        reason: &str,
    ) -> Result<SocietyRequest, SocietyRequestRepositoryError>;
}
