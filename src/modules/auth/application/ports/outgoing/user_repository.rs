use async_trait::async_trait;

use crate::auth::application::domain::entities::{NewUser, User};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User with email {0} already exists")]
    DuplicateKey(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Persist every mutable field of `user`. The stored password hash is only
    /// rewritten when it differs from the one already on record.
    async fn save_user(&self, user: &User) -> Result<User, UserRepositoryError>;
}
