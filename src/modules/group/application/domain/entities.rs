use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A sub-team inside one society. Names are unique per society,
/// compared case-insensitively.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub id: Uuid,
    pub user_id: UserId,
    pub society_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn belongs_to(&self, society_id: Uuid) -> bool {
        self.society_id == society_id
    }
}
