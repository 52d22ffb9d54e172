use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::domain::entities::Group;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupQuery: Send + Sync {
    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<Group>, GroupQueryError>;

    /// Groups of one society, ordered by name.
    async fn list_by_society(&self, society_id: Uuid) -> Result<Vec<Group>, GroupQueryError>;
}
