use async_trait::async_trait;

use crate::auth::application::helpers::PlatformAccess;
use crate::society::application::domain::entities::{SocietyRequest, SocietyRequestStatus};
use crate::society::application::ports::{
    incoming::use_cases::{
        RejectSocietyRequestCommand, RejectSocietyRequestError, RejectSocietyRequestUseCase,
    },
    outgoing::{SocietyRequestRepository, SocietyRequestRepositoryError},
};

#[derive(Clone)]
pub struct RejectSocietyRequestService<R>
where
    R: SocietyRequestRepository + Send + Sync,
{
    access: PlatformAccess,
    repository: R,
}

impl<R> RejectSocietyRequestService<R>
where
    R: SocietyRequestRepository + Send + Sync,
{
    pub fn new(access: PlatformAccess, repository: R) -> Self {
        Self { access, repository }
    }
}

#[async_trait]
impl<R> RejectSocietyRequestUseCase for RejectSocietyRequestService<R>
where
    R: SocietyRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RejectSocietyRequestCommand,
    ) -> Result<SocietyRequest, RejectSocietyRequestError> {
        self.access.require_super_admin(command.actor()).await?;

        let request = self
            .repository
            .find_by_id(command.request_id())
            .await
            .map_err(|e| RejectSocietyRequestError::RepositoryError(e.to_string()))?
            .ok_or(RejectSocietyRequestError::RequestNotFound)?;

        request
            .status
            .transition(command.decision())
            .map_err(|_| RejectSocietyRequestError::AlreadyResolved(request.status))?;

        match self.repository.reject(request.id, command.reason()).await {
            Ok(rejected) => Ok(rejected),
            Err(SocietyRequestRepositoryError::RequestNotFound) => {
                Err(RejectSocietyRequestError::RequestNotFound)
            }
            // Another writer resolved it between the read and the guarded update.
            Err(SocietyRequestRepositoryError::AlreadyResolved) => {
                let status = match self.repository.find_by_id(request.id).await {
                    Ok(Some(current)) => current.status,
                    _ => SocietyRequestStatus::Rejected,
                };
                Err(RejectSocietyRequestError::AlreadyResolved(status))
            }
            Err(other) => Err(RejectSocietyRequestError::RepositoryError(
                other.to_string(),
            )),
        }
    }
}
