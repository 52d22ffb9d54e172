use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::domain::entities::Group;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListGroupsError {
    #[error("Society not found")]
    SocietyNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListGroupsUseCase: Send + Sync {
    async fn execute(&self, society_id: Uuid) -> Result<Vec<Group>, ListGroupsError>;
}
