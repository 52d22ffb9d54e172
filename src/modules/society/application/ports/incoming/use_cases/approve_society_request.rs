use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::society::application::domain::entities::SocietyRequestStatus;
use crate::society::application::ports::outgoing::ApprovedSocietyRequest;

#[derive(Debug, Clone)]
pub struct ApproveSocietyRequestCommand {
    pub actor: UserId,
    pub request_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApproveSocietyRequestError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Society request not found")]
    RequestNotFound,

    #[error("Society request is already {0}")]
    AlreadyResolved(SocietyRequestStatus),

    #[error("A society named '{0}' already exists")]
    DuplicateKey(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for ApproveSocietyRequestError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Forbidden
            | AccessError::UnknownActor
            | AccessError::AccountDisabled => Self::Forbidden,
            AccessError::RepositoryError(msg) => Self::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait ApproveSocietyRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ApproveSocietyRequestCommand,
    ) -> Result<ApprovedSocietyRequest, ApproveSocietyRequestError>;
}
