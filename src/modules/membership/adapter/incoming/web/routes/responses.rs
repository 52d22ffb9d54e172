use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::membership::application::domain::entities::SocietyUserRole;

#[derive(Debug, Serialize, ToSchema)]
pub struct SocietyRoleResponse {
    pub id: String,
    /// Member display name at assignment time
    #[schema(example = "Grace Hopper")]
    pub name: String,
    pub user_id: String,
    pub society_id: String,
    #[schema(example = "GENERAL SECRETARY")]
    pub role: String,
    pub group_id: Option<String>,
    pub assigned_by: String,
    #[schema(value_type = String, format = DateTime)]
    pub assigned_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<SocietyUserRole> for SocietyRoleResponse {
    fn from(role: SocietyUserRole) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name,
            user_id: role.user_id.to_string(),
            society_id: role.society_id.to_string(),
            role: role.role.as_str().to_string(),
            group_id: role.group_id.map(|g| g.to_string()),
            assigned_by: role.assigned_by.to_string(),
            assigned_at: role.assigned_at,
            updated_at: role.updated_at,
        }
    }
}
