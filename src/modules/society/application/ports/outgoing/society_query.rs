use async_trait::async_trait;
use uuid::Uuid;

use crate::society::application::domain::entities::Society;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocietyQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored society record is invalid: {0}")]
    InvalidRecord(String),
}

#[async_trait]
pub trait SocietyQuery: Send + Sync {
    async fn find_by_id(&self, society_id: Uuid) -> Result<Option<Society>, SocietyQueryError>;

    /// True when an ACTIVE or SUSPENDED society already uses `name`,
    /// compared case-insensitively.
    async fn live_name_exists(&self, name: &str) -> Result<bool, SocietyQueryError>;
}
