use async_trait::async_trait;

use crate::auth::application::helpers::PlatformAccess;
use crate::shared::domain::DomainError;
use crate::society::application::domain::entities::{Society, SocietyStatus};
use crate::society::application::ports::{
    incoming::use_cases::{SetSocietyStatusCommand, SetSocietyStatusError, SetSocietyStatusUseCase},
    outgoing::{SocietyQuery, SocietyRepository, SocietyRepositoryError},
};

#[derive(Clone)]
pub struct SetSocietyStatusService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: SocietyRepository + Send + Sync,
{
    access: PlatformAccess,
    query: Q,
    repository: R,
}

impl<Q, R> SetSocietyStatusService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: SocietyRepository + Send + Sync,
{
    pub fn new(access: PlatformAccess, query: Q, repository: R) -> Self {
        Self {
            access,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> SetSocietyStatusUseCase for SetSocietyStatusService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: SocietyRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetSocietyStatusCommand,
    ) -> Result<Society, SetSocietyStatusError> {
        self.access.require_super_admin(command.actor()).await?;

        let society = self
            .query
            .find_by_id(command.society_id())
            .await
            .map_err(|e| SetSocietyStatusError::RepositoryError(e.to_string()))?
            .ok_or(SetSocietyStatusError::SocietyNotFound)?;

        let next = society
            .status
            .transition_to(command.status())
            .map_err(SetSocietyStatusError::InvalidTransition)?;

        self.repository
            .update_status(society.id, next)
            .await
            .map_err(|e| match e {
                SocietyRepositoryError::SocietyNotFound => SetSocietyStatusError::SocietyNotFound,
                SocietyRepositoryError::AlreadyDeleted => {
                    SetSocietyStatusError::InvalidTransition(DomainError::InvalidTransition {
                        entity: "Society",
                        from: SocietyStatus::Deleted.as_str(),
                        to: next.as_str(),
                    })
                }
                other => SetSocietyStatusError::RepositoryError(other.to_string()),
            })
    }
}
