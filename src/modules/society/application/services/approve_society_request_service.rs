use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::helpers::PlatformAccess;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::society::application::domain::entities::{
    SocietyRequestDecision, SocietyRequestStatus,
};
use crate::society::application::ports::{
    incoming::use_cases::{
        ApproveSocietyRequestCommand, ApproveSocietyRequestError, ApproveSocietyRequestUseCase,
    },
    outgoing::{ApprovedSocietyRequest, SocietyRequestRepository, SocietyRequestRepositoryError},
};

#[derive(Clone)]
pub struct ApproveSocietyRequestService<R>
where
    R: SocietyRequestRepository + Send + Sync,
{
    access: PlatformAccess,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    repository: R,
}

impl<R> ApproveSocietyRequestService<R>
where
    R: SocietyRequestRepository + Send + Sync,
{
    pub fn new(
        access: PlatformAccess,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        repository: R,
    ) -> Self {
        Self {
            access,
            user_query,
            repository,
        }
    }

    /// Status of a request another writer resolved first.
    async fn resolved_status(&self, request_id: Uuid) -> SocietyRequestStatus {
        match self.repository.find_by_id(request_id).await {
            Ok(Some(request)) => request.status,
            _ => SocietyRequestStatus::Approved,
        }
    }
}

#[async_trait]
impl<R> ApproveSocietyRequestUseCase for ApproveSocietyRequestService<R>
where
    R: SocietyRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ApproveSocietyRequestCommand,
    ) -> Result<ApprovedSocietyRequest, ApproveSocietyRequestError> {
        self.access.require_super_admin(command.actor).await?;

        let request = self
            .repository
            .find_by_id(command.request_id)
            .await
            .map_err(|e| ApproveSocietyRequestError::RepositoryError(e.to_string()))?
            .ok_or(ApproveSocietyRequestError::RequestNotFound)?;

        request
            .status
            .transition(&SocietyRequestDecision::Approve)
            .map_err(|_| ApproveSocietyRequestError::AlreadyResolved(request.status))?;

        let requester = self
            .user_query
            .find_by_id(request.user_id.value())
            .await
            .map_err(|e| ApproveSocietyRequestError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                ApproveSocietyRequestError::RepositoryError(format!(
                    "requester {} no longer exists",
                    request.user_id
                ))
            })?;

        match self
            .repository
            .approve(&request, &requester.name, command.actor)
            .await
        {
            Ok(approved) => Ok(approved),
            Err(SocietyRequestRepositoryError::DuplicateKey(name)) => {
                Err(ApproveSocietyRequestError::DuplicateKey(name))
            }
            Err(SocietyRequestRepositoryError::RequestNotFound) => {
                Err(ApproveSocietyRequestError::RequestNotFound)
            }
            Err(SocietyRequestRepositoryError::AlreadyResolved) => Err(
                ApproveSocietyRequestError::AlreadyResolved(self.resolved_status(request.id).await),
            ),
            Err(other) => Err(ApproveSocietyRequestError::RepositoryError(
                other.to_string(),
            )),
        }
    }
}
