use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::UserQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("Authenticated user no longer exists")]
    UnknownActor,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves the caller of a request into a platform user.
#[derive(Clone)]
pub struct PlatformAccess {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl PlatformAccess {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    /// Suspended, inactive or deactivated accounts are refused even when
    /// they still hold an unexpired token.
    pub async fn actor(&self, actor: UserId) -> Result<User, AccessError> {
        let user = self
            .user_query
            .find_by_id(actor.value())
            .await
            .map_err(|e| AccessError::RepositoryError(e.to_string()))?
            .ok_or(AccessError::UnknownActor)?;

        if !user.can_log_in() {
            tracing::warn!(
                user_id = %actor,
                status = %user.status,
                "Disabled account attempted an action"
            );
            return Err(AccessError::AccountDisabled);
        }
        Ok(user)
    }

    pub async fn require_super_admin(&self, actor: UserId) -> Result<User, AccessError> {
        let user = self.actor(actor).await?;
        if user.role.is_super_admin() {
            Ok(user)
        } else {
            tracing::warn!(user_id = %actor, "SuperAdmin privilege required");
            Err(AccessError::Forbidden)
        }
    }
}
