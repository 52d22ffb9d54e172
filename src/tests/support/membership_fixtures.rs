use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::{
    RoleAssignment, SocietyRole, SocietyUserRole,
};
use crate::membership::application::ports::outgoing::{
    SocietyRoleQuery, SocietyRoleQueryError, SocietyRoleRepository, SocietyRoleRepositoryError,
};

pub fn assignment(user_id: UserId, society_id: Uuid, role: SocietyRole) -> SocietyUserRole {
    let now = Utc::now();
    SocietyUserRole {
        id: Uuid::new_v4(),
        name: "Alan Turing".to_string(),
        user_id,
        society_id,
        role,
        group_id: None,
        assigned_by: user_id,
        assigned_at: now,
        updated_at: now,
    }
}

/// Role store keyed by `(user_id, society_id)`.
#[derive(Clone, Default)]
pub struct InMemoryRoles {
    rows: Arc<Mutex<Vec<SocietyUserRole>>>,
}

impl InMemoryRoles {
    pub fn insert(&self, role: SocietyUserRole) {
        self.rows.lock().unwrap().push(role);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SocietyRoleQuery for InMemoryRoles {
    async fn find_role(
        &self,
        user_id: UserId,
        society_id: Uuid,
    ) -> Result<Option<SocietyUserRole>, SocietyRoleQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.society_id == society_id)
            .cloned())
    }

    async fn list_by_society(
        &self,
        society_id: Uuid,
    ) -> Result<Vec<SocietyUserRole>, SocietyRoleQueryError> {
        let mut listed: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.society_id == society_id)
            .cloned()
            .collect();
        listed.sort_by_key(|r| r.assigned_at);
        Ok(listed)
    }
}

#[async_trait]
impl SocietyRoleRepository for InMemoryRoles {
    async fn upsert(
        &self,
        assignment: RoleAssignment,
    ) -> Result<SocietyUserRole, SocietyRoleRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();

        if let Some(existing) = rows
            .iter_mut()
            .find(|r| r.user_id == assignment.user_id && r.society_id == assignment.society_id)
        {
            existing.name = assignment.name;
            existing.role = assignment.role;
            existing.group_id = assignment.group_id;
            existing.assigned_by = assignment.assigned_by;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let created = SocietyUserRole {
            id: Uuid::new_v4(),
            name: assignment.name,
            user_id: assignment.user_id,
            society_id: assignment.society_id,
            role: assignment.role,
            group_id: assignment.group_id,
            assigned_by: assignment.assigned_by,
            assigned_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }
}
