use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::outgoing::{
    GroupQuery, GroupQueryError, GroupRepository, GroupRepositoryError, NewGroup,
};

pub fn sample_group(society_id: Uuid, name: &str) -> Group {
    let now = Utc::now();
    Group {
        id: Uuid::new_v4(),
        user_id: UserId::from(Uuid::new_v4()),
        society_id,
        name: name.to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGroups {
    rows: Arc<Mutex<Vec<Group>>>,
}

impl InMemoryGroups {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl GroupQuery for InMemoryGroups {
    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<Group>, GroupQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == group_id)
            .cloned())
    }

    async fn list_by_society(&self, society_id: Uuid) -> Result<Vec<Group>, GroupQueryError> {
        let mut listed: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.belongs_to(society_id))
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroups {
    async fn create(&self, group: NewGroup) -> Result<Group, GroupRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|g| g.belongs_to(group.society_id) && g.name.eq_ignore_ascii_case(&group.name))
        {
            return Err(GroupRepositoryError::DuplicateKey(group.name));
        }

        let now = Utc::now();
        let created = Group {
            id: Uuid::new_v4(),
            user_id: group.user_id,
            society_id: group.society_id,
            name: group.name,
            description: group.description,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }
}
