use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::group::application::domain::entities::Group;

#[derive(Debug, Serialize, ToSchema)]
pub struct GroupResponse {
    pub id: String,
    pub society_id: String,
    /// Creator of the group
    pub user_id: String,
    #[schema(example = "Hardware")]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.to_string(),
            society_id: group.society_id.to_string(),
            user_id: group.user_id.to_string(),
            name: group.name,
            description: group.description,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}
