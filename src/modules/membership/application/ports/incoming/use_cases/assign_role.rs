use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::membership::application::domain::entities::{SocietyRole, SocietyUserRole};
use crate::shared::domain::DomainError;

//
// ──────────────────────────────────────────────────────────
// Assign Role Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AssignRoleCommand {
    actor: UserId,
    society_id: Uuid,
    user_id: UserId,
    name: String,
    role: SocietyRole,
    group_id: Option<Uuid>,
}

impl AssignRoleCommand {
    pub fn new(
        actor: UserId,
        society_id: Uuid,
        user_id: UserId,
        name: String,
        role: Option<&str>,
        group_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField("name"));
        }

        Ok(Self {
            actor,
            society_id,
            user_id,
            name: name.to_string(),
            role: SocietyRole::parse_or_default(role)?,
            group_id,
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn society_id(&self) -> Uuid {
        self.society_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> SocietyRole {
        self.role
    }

    pub fn group_id(&self) -> Option<Uuid> {
        self.group_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignRoleError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Society not found")]
    SocietyNotFound,

    #[error("Society is deleted")]
    SocietyDeleted,

    #[error("User not found")]
    UserNotFound,

    #[error("Group {0} does not belong to this society")]
    GroupNotInSociety(Uuid),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for AssignRoleError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Forbidden
            | AccessError::UnknownActor
            | AccessError::AccountDisabled => AssignRoleError::Forbidden,
            AccessError::RepositoryError(msg) => AssignRoleError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AssignRoleUseCase: Send + Sync {
    async fn execute(&self, command: AssignRoleCommand) -> Result<SocietyUserRole, AssignRoleError>;
}
