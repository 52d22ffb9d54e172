use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::group::application::domain::entities::Group;
use crate::shared::domain::DomainError;

//
// ──────────────────────────────────────────────────────────
// Create Group Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    actor: UserId,
    society_id: Uuid,
    name: String,
    description: Option<String>,
}

impl CreateGroupCommand {
    pub fn new(
        actor: UserId,
        society_id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField("name"));
        }

        Ok(Self {
            actor,
            society_id,
            name: name.to_string(),
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn society_id(&self) -> Uuid {
        self.society_id
    }

    pub fn name(&self) -> &str {
        &self.name
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
pub enum CreateGroupError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Society not found")]
    SocietyNotFound,

    #[error("Society is deleted")]
    SocietyDeleted,

    #[error("A group named '{0}' already exists in this society")]
    DuplicateKey(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for CreateGroupError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Forbidden
            | AccessError::UnknownActor
            | AccessError::AccountDisabled => CreateGroupError::Forbidden,
            AccessError::RepositoryError(msg) => CreateGroupError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(&self, command: CreateGroupCommand) -> Result<Group, CreateGroupError>;
}
