use async_trait::async_trait;
use uuid::Uuid;

use crate::society::application::domain::entities::{Society, SocietyStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocietyRepositoryError {
    #[error("Society not found")]
    SocietyNotFound,

    #[error("Society is already deleted")]
    AlreadyDeleted,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocietyRepository: Send + Sync {
    /// Writes only while the stored row is not `DELETED`; a row that was
    /// deleted after the caller read it yields `AlreadyDeleted`.
    async fn update_status(
        &self,
        society_id: Uuid,
        status: SocietyStatus,
    ) -> Result<Society, SocietyRepositoryError>;
}
