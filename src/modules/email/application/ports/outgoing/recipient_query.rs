use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::SocietyRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipientQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RecipientQuery: Send + Sync {
    /// Members of a society with their account email, optionally limited to
    /// one society role.
    async fn society_recipients(
        &self,
        society_id: Uuid,
        role: Option<SocietyRole>,
    ) -> Result<Vec<Recipient>, RecipientQueryError>;
}
