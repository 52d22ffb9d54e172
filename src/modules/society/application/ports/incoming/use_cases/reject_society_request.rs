use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::shared::domain::DomainError;
use crate::society::application::domain::entities::{
    SocietyRequest, SocietyRequestDecision, SocietyRequestStatus,
};

#[derive(Debug, Clone)]
pub struct RejectSocietyRequestCommand {
    actor: UserId,
    request_id: Uuid,
    decision: SocietyRequestDecision,
}

impl RejectSocietyRequestCommand {
    pub fn new(
        actor: UserId,
        request_id: Uuid,
        reason: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            actor,
            request_id,
            decision: SocietyRequestDecision::reject(reason)?,
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn decision(&self) -> &SocietyRequestDecision {
        &self.decision
    }

    pub fn reason(&self) -> &str {
        match &self.decision {
            SocietyRequestDecision::Reject { reason } => reason,
            SocietyRequestDecision::Approve => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectSocietyRequestError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Society request not found")]
    RequestNotFound,

    #[error("Society request is already {0}")]
    AlreadyResolved(SocietyRequestStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for RejectSocietyRequestError {
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
pub trait RejectSocietyRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RejectSocietyRequestCommand,
    ) -> Result<SocietyRequest, RejectSocietyRequestError>;
}
