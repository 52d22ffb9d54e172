use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::membership::application::domain::entities::SocietyRole;
use crate::shared::domain::DomainError;

//
// ──────────────────────────────────────────────────────────
// Send Bulk Email Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SendBulkEmailCommand {
    actor: UserId,
    society_id: Uuid,
    subject: String,
    body: String,
    role_filter: Option<SocietyRole>,
}

impl SendBulkEmailCommand {
    pub fn new(
        actor: UserId,
        society_id: Uuid,
        subject: String,
        body: String,
        role_filter: Option<&str>,
    ) -> Result<Self, DomainError> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(DomainError::MissingRequiredField("subject"));
        }
        if body.trim().is_empty() {
            return Err(DomainError::MissingRequiredField("body"));
        }

        Ok(Self {
            actor,
            society_id,
            subject: subject.to_string(),
            body,
            role_filter: role_filter.map(str::parse).transpose()?,
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn society_id(&self) -> Uuid {
        self.society_id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn role_filter(&self) -> Option<SocietyRole> {
        self.role_filter
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDelivery {
    pub email: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkEmailReport {
    pub sent: Vec<String>,
    pub failed: Vec<FailedDelivery>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendBulkEmailError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Society not found")]
    SocietyNotFound,

    #[error("Society is deleted")]
    SocietyDeleted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for SendBulkEmailError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Forbidden
            | AccessError::UnknownActor
            | AccessError::AccountDisabled => SendBulkEmailError::Forbidden,
            AccessError::RepositoryError(msg) => SendBulkEmailError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SendBulkEmailUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SendBulkEmailCommand,
    ) -> Result<BulkEmailReport, SendBulkEmailError>;
}
