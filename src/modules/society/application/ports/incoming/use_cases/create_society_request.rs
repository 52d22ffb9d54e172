use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::DomainError;
use crate::society::application::domain::entities::SocietyRequest;

//
// ──────────────────────────────────────────────────────────
// Create Society Request Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateSocietyRequestCommand {
    requester: UserId,
    society_name: String,
    description: Option<String>,
}

impl CreateSocietyRequestCommand {
    pub fn new(
        requester: UserId,
        society_name: String,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let society_name = society_name.trim();
        if society_name.is_empty() {
            return Err(DomainError::MissingRequiredField("society_name"));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            requester,
            society_name: society_name.to_string(),
            description,
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    pub fn society_name(&self) -> &str {
        &self.society_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSocietyRequestError {
    #[error("A society named '{0}' already exists")]
    DuplicateKey(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateSocietyRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateSocietyRequestCommand,
    ) -> Result<SocietyRequest, CreateSocietyRequestError>;
}
