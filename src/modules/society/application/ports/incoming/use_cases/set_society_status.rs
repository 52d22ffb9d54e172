use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::shared::domain::DomainError;
use crate::society::application::domain::entities::{Society, SocietyStatus};

#[derive(Debug, Clone)]
pub struct SetSocietyStatusCommand {
    actor: UserId,
    society_id: Uuid,
    status: SocietyStatus,
}

impl SetSocietyStatusCommand {
    pub fn new(actor: UserId, society_id: Uuid, status: &str) -> Result<Self, DomainError> {
        Ok(Self {
            actor,
            society_id,
            status: status.parse()?,
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn society_id(&self) -> Uuid {
        self.society_id
    }

    pub fn status(&self) -> SocietyStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetSocietyStatusError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Society not found")]
    SocietyNotFound,

    #[error(transparent)]
    InvalidTransition(DomainError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for SetSocietyStatusError {
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
pub trait SetSocietyStatusUseCase: Send + Sync {
    async fn execute(&self, command: SetSocietyStatusCommand)
        -> Result<Society, SetSocietyStatusError>;
}
