use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::SocietyUserRole;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocietyRoleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored role assignment is invalid: {0}")]
    InvalidRecord(String),
}

#[async_trait]
pub trait SocietyRoleQuery: Send + Sync {
    async fn find_role(
        &self,
        user_id: UserId,
        society_id: Uuid,
    ) -> Result<Option<SocietyUserRole>, SocietyRoleQueryError>;

    async fn list_by_society(
        &self,
        society_id: Uuid,
    ) -> Result<Vec<SocietyUserRole>, SocietyRoleQueryError>;
}
