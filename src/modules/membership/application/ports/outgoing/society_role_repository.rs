use async_trait::async_trait;

use crate::membership::application::domain::entities::{RoleAssignment, SocietyUserRole};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocietyRoleRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SocietyRoleRepository: Send + Sync {
    /// Inserts the assignment, or rewrites the existing row for the same
    /// `(user_id, society_id)` pair.
    async fn upsert(
        &self,
        assignment: RoleAssignment,
    ) -> Result<SocietyUserRole, SocietyRoleRepositoryError>;
}
