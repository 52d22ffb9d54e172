use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{User, UserId, UserStatus},
    helpers::{AccessError, PlatformAccess},
    ports::outgoing::{UserQuery, UserRepository, UserRepositoryError},
};
use crate::shared::domain::DomainError;

#[derive(Debug, Clone)]
pub struct SetUserStatusCommand {
    actor: UserId,
    target: UserId,
    status: UserStatus,
}

impl SetUserStatusCommand {
    /// The raw status string is parsed here, so an unknown value never
    /// reaches storage.
    pub fn new(actor: UserId, target: UserId, status: &str) -> Result<Self, DomainError> {
        Ok(Self {
            actor,
            target,
            status: status.parse()?,
        })
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetUserStatusError {
    #[error("Insufficient privileges")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccessError> for SetUserStatusError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Forbidden
            | AccessError::UnknownActor
            | AccessError::AccountDisabled => SetUserStatusError::Forbidden,
            AccessError::RepositoryError(msg) => SetUserStatusError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait ISetUserStatusUseCase: Send + Sync {
    async fn execute(&self, command: SetUserStatusCommand) -> Result<User, SetUserStatusError>;
}

#[derive(Clone)]
pub struct SetUserStatusUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    access: PlatformAccess,
    query: Q,
    repository: R,
}

impl<Q, R> SetUserStatusUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
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
impl<Q, R> ISetUserStatusUseCase for SetUserStatusUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: SetUserStatusCommand) -> Result<User, SetUserStatusError> {
        self.access.require_super_admin(command.actor).await?;

        let mut user = self
            .query
            .find_by_id(command.target.value())
            .await
            .map_err(|e| SetUserStatusError::RepositoryError(e.to_string()))?
            .ok_or(SetUserStatusError::UserNotFound)?;

        user.status = command.status;

        self.repository
            .save_user(&user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SetUserStatusError::UserNotFound,
                other => SetUserStatusError::RepositoryError(other.to_string()),
            })
    }
}
