use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::{
    domain::entities::{NewUser, User, UserRole, UserStatus},
    ports::incoming::password_policy::{PasswordPolicy, PasswordPolicyError},
    ports::outgoing::{UserRepository, UserRepositoryError},
    services::{password::BasicPasswordPolicy, CredentialStore},
};
use crate::shared::domain::DomainError;

// ========================= Register Command =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("SuperAdmin accounts cannot be self-registered")]
    PrivilegedRole,
}

/// Registration input, validated before any hashing takes place.
#[derive(Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
    role: UserRole,
    status: UserStatus,
}

impl RegisterUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
        role: Option<String>,
        status: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField("name").into());
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::MissingRequiredField("email").into());
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterUserCommandError::InvalidEmailFormat);
        }

        BasicPasswordPolicy.validate(&password)?;

        let role = match role {
            Some(raw) => raw.parse::<UserRole>()?,
            None => UserRole::default(),
        };
        if role.is_super_admin() {
            return Err(RegisterUserCommandError::PrivilegedRole);
        }

        let status = match status {
            Some(raw) => raw.parse::<UserStatus>()?,
            None => UserStatus::default(),
        };

        Ok(Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            password,
            role,
            status,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }
}

impl std::fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("User with email {0} already exists")]
    DuplicateKey(String),

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Register Use Case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    credentials: CredentialStore,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, credentials: CredentialStore) -> Self {
        Self {
            repository,
            credentials,
        }
    }
}

#[async_trait]
impl<R> ICreateUserUseCase for CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, CreateUserError> {
        let password_hash = self
            .credentials
            .set_password(&command.password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed during registration");
                CreateUserError::HashingFailed
            })?;

        let new_user = NewUser {
            name: command.name,
            email: command.email,
            password_hash,
            status: command.status,
            role: command.role,
        };

        self.repository
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DuplicateKey(email) => CreateUserError::DuplicateKey(email),
                other => CreateUserError::RepositoryError(other.to_string()),
            })
    }
}
