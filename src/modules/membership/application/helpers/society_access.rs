use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::{AccessError, PlatformAccess};
use crate::membership::application::domain::entities::SocietyRole;
use crate::membership::application::ports::outgoing::SocietyRoleQuery;

/// How the caller qualified for a society-scoped action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorStanding {
    SuperAdmin,
    Officer(SocietyRole),
}

impl ActorStanding {
    pub fn is_super_admin(&self) -> bool {
        matches!(self, ActorStanding::SuperAdmin)
    }
}

#[derive(Clone)]
pub struct SocietyAccess {
    platform: PlatformAccess,
    roles: Arc<dyn SocietyRoleQuery + Send + Sync>,
}

impl SocietyAccess {
    pub fn new(platform: PlatformAccess, roles: Arc<dyn SocietyRoleQuery + Send + Sync>) -> Self {
        Self { platform, roles }
    }

    /// A SuperAdmin always passes. Anyone else must hold one of `allowed`
    /// in the given society.
    pub async fn require_any(
        &self,
        actor: UserId,
        society_id: Uuid,
        allowed: &[SocietyRole],
    ) -> Result<ActorStanding, AccessError> {
        let user = self.platform.actor(actor).await?;
        if user.role.is_super_admin() {
            return Ok(ActorStanding::SuperAdmin);
        }

        let held = self
            .roles
            .find_role(actor, society_id)
            .await
            .map_err(|e| AccessError::RepositoryError(e.to_string()))?;

        match held {
            Some(assignment) if allowed.contains(&assignment.role) => {
                Ok(ActorStanding::Officer(assignment.role))
            }
            _ => {
                tracing::warn!(
                    user_id = %actor,
                    society_id = %society_id,
                    "Society role required"
                );
                Err(AccessError::Forbidden)
            }
        }
    }
}
