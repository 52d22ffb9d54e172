use async_trait::async_trait;
use uuid::Uuid;

use crate::membership::application::domain::entities::SocietyUserRole;
use crate::membership::application::ports::{
    incoming::use_cases::{ListRolesError, ListRolesUseCase},
    outgoing::SocietyRoleQuery,
};
use crate::society::application::ports::outgoing::SocietyQuery;

#[derive(Debug, Clone)]
pub struct ListRolesService<S, Q>
where
    S: SocietyQuery + Send + Sync,
    Q: SocietyRoleQuery + Send + Sync,
{
    society_query: S,
    role_query: Q,
}

impl<S, Q> ListRolesService<S, Q>
where
    S: SocietyQuery + Send + Sync,
    Q: SocietyRoleQuery + Send + Sync,
{
    pub fn new(society_query: S, role_query: Q) -> Self {
        Self {
            society_query,
            role_query,
        }
    }
}

#[async_trait]
impl<S, Q> ListRolesUseCase for ListRolesService<S, Q>
where
    S: SocietyQuery + Send + Sync,
    Q: SocietyRoleQuery + Send + Sync,
{
    async fn execute(&self, society_id: Uuid) -> Result<Vec<SocietyUserRole>, ListRolesError> {
        self.society_query
            .find_by_id(society_id)
            .await
            .map_err(|e| ListRolesError::RepositoryError(e.to_string()))?
            .ok_or(ListRolesError::SocietyNotFound)?;

        self.role_query
            .list_by_society(society_id)
            .await
            .map_err(|e| ListRolesError::RepositoryError(e.to_string()))
    }
}
