use async_trait::async_trait;
use uuid::Uuid;

use crate::membership::application::domain::entities::SocietyUserRole;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListRolesError {
    #[error("Society not found")]
    SocietyNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListRolesUseCase: Send + Sync {
    async fn execute(&self, society_id: Uuid) -> Result<Vec<SocietyUserRole>, ListRolesError>;
}
