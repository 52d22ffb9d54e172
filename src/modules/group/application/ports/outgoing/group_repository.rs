use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::group::application::domain::entities::Group;

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub user_id: UserId,
    pub society_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupRepositoryError {
    #[error("A group named '{0}' already exists in this society")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create(&self, group: NewGroup) -> Result<Group, GroupRepositoryError>;
}
