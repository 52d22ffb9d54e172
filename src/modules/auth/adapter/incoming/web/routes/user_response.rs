use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::User;

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "Member")]
    pub role: String,

    #[schema(example = "ACTIVE")]
    pub status: String,

    pub email_verified: bool,
    pub is_active: bool,
    pub password_reset_required: bool,

    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,

    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
            status: user.status.as_str().to_string(),
            email_verified: user.email_verified,
            is_active: user.is_active,
            password_reset_required: user.password_reset_required,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
