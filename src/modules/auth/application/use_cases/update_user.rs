use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{User, UserId},
    ports::incoming::password_policy::{PasswordPolicy, PasswordPolicyError},
    ports::outgoing::{UserQuery, UserRepository, UserRepositoryError},
    services::{password::BasicPasswordPolicy, CredentialStore},
};
use crate::shared::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserCommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),
}

#[derive(Clone)]
pub struct UpdateUserCommand {
    user_id: UserId,
    name: Option<String>,
    password: Option<String>,
}

impl UpdateUserCommand {
    pub fn new(
        user_id: UserId,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<Self, UpdateUserCommandError> {
        let name = match name {
            Some(raw) if raw.trim().is_empty() => {
                return Err(DomainError::MissingRequiredField("name").into())
            }
            Some(raw) => Some(raw.trim().to_string()),
            None => None,
        };

        if let Some(password) = &password {
            BasicPasswordPolicy.validate(password)?;
        }

        Ok(Self {
            user_id,
            name,
            password,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn changes_password(&self) -> bool {
        self.password.is_some()
    }
}

impl std::fmt::Debug for UpdateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserCommand")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("changes_password", &self.password.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError>;
}

#[derive(Clone)]
pub struct UpdateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    credentials: CredentialStore,
}

impl<Q, R> UpdateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, credentials: CredentialStore) -> Self {
        Self {
            query,
            repository,
            credentials,
        }
    }
}

#[async_trait]
impl<Q, R> IUpdateUserUseCase for UpdateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        let mut user = self
            .query
            .find_by_id(command.user_id.value())
            .await
            .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))?
            .ok_or(UpdateUserError::UserNotFound)?;

        if !user.can_log_in() {
            return Err(UpdateUserError::AccountDisabled);
        }

        user.password_hash = self
            .credentials
            .apply_password_change(&user.password_hash, command.password.as_deref())
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Password hashing failed");
                UpdateUserError::HashingFailed
            })?;

        if command.password.is_some() {
            user.password_reset_required = false;
        }

        if let Some(name) = command.name {
            user.name = name;
        }

        self.repository
            .save_user(&user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}
