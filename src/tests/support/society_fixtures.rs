use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::{SocietyRole, SocietyUserRole};
use crate::society::application::domain::entities::{
    Society, SocietyRequest, SocietyRequestStatus, SocietyStatus,
};
use crate::society::application::ports::outgoing::{
    ApprovedSocietyRequest, NewSocietyRequest, SocietyQuery, SocietyQueryError,
    SocietyRepository, SocietyRepositoryError, SocietyRequestRepository,
    SocietyRequestRepositoryError,
};

pub fn sample_society(name: &str, status: SocietyStatus) -> Society {
    let now = Utc::now();
    Society {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: Some("Builds things on weekends".to_string()),
        status,
        created_by: UserId::from(Uuid::new_v4()),
        created_at: now,
        updated_at: now,
    }
}

pub fn pending_request(requester: UserId, society_name: &str) -> SocietyRequest {
    let now = Utc::now();
    SocietyRequest {
        id: Uuid::new_v4(),
        user_id: requester,
        society_name: society_name.to_string(),
        description: None,
        status: SocietyRequestStatus::Pending,
        rejection_reason: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
struct State {
    societies: HashMap<Uuid, Society>,
    requests: HashMap<Uuid, SocietyRequest>,
    roles: Vec<SocietyUserRole>,
}

/// Societies, requests and the president rows written on approval,
/// behind one lock so approval stays all-or-nothing.
#[derive(Clone, Default)]
pub struct InMemorySocieties {
    state: Arc<Mutex<State>>,
}

impl InMemorySocieties {
    pub fn insert_society(&self, society: Society) {
        self.state
            .lock()
            .unwrap()
            .societies
            .insert(society.id, society);
    }

    pub fn insert_request(&self, request: SocietyRequest) {
        self.state
            .lock()
            .unwrap()
            .requests
            .insert(request.id, request);
    }

    pub fn society(&self, id: Uuid) -> Option<Society> {
        self.state.lock().unwrap().societies.get(&id).cloned()
    }

    pub fn request(&self, id: Uuid) -> Option<SocietyRequest> {
        self.state.lock().unwrap().requests.get(&id).cloned()
    }

    pub fn society_count(&self) -> usize {
        self.state.lock().unwrap().societies.len()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn roles(&self) -> Vec<SocietyUserRole> {
        self.state.lock().unwrap().roles.clone()
    }
}

#[async_trait]
impl SocietyQuery for InMemorySocieties {
    async fn find_by_id(&self, society_id: Uuid) -> Result<Option<Society>, SocietyQueryError> {
        Ok(self.society(society_id))
    }

    async fn live_name_exists(&self, name: &str) -> Result<bool, SocietyQueryError> {
        let wanted = name.trim();
        Ok(self
            .state
            .lock()
            .unwrap()
            .societies
            .values()
            .any(|s| !s.status.is_deleted() && s.name.eq_ignore_ascii_case(wanted)))
    }
}

#[async_trait]
impl SocietyRepository for InMemorySocieties {
    async fn update_status(
        &self,
        society_id: Uuid,
        status: SocietyStatus,
    ) -> Result<Society, SocietyRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let society = state
            .societies
            .get_mut(&society_id)
            .ok_or(SocietyRepositoryError::SocietyNotFound)?;
        if society.status.is_deleted() {
            return Err(SocietyRepositoryError::AlreadyDeleted);
        }
        society.status = status;
        society.updated_at = Utc::now();
        Ok(society.clone())
    }
}

#[async_trait]
impl SocietyRequestRepository for InMemorySocieties {
    async fn create_request(
        &self,
        data: NewSocietyRequest,
    ) -> Result<SocietyRequest, SocietyRequestRepositoryError> {
        let mut request = pending_request(data.user_id, &data.society_name);
        request.description = data.description;
        self.insert_request(request.clone());
        Ok(request)
    }

    async fn find_by_id(
        &self,
        request_id: Uuid,
    ) -> Result<Option<SocietyRequest>, SocietyRequestRepositoryError> {
        Ok(self.request(request_id))
    }

    async fn approve(
        &self,
        request: &SocietyRequest,
        president_name: &str,
        approved_by: UserId,
    ) -> Result<ApprovedSocietyRequest, SocietyRequestRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let stored = state
            .requests
            .get(&request.id)
            .ok_or(SocietyRequestRepositoryError::RequestNotFound)?;
        if stored.status.is_resolved() {
            return Err(SocietyRequestRepositoryError::AlreadyResolved);
        }
        // Deleted societies keep their name reserved.
        if state
            .societies
            .values()
            .any(|s| s.name.eq_ignore_ascii_case(&request.society_name))
        {
            return Err(SocietyRequestRepositoryError::DuplicateKey(
                request.society_name.clone(),
            ));
        }

        let now = Utc::now();
        let society = Society {
            id: Uuid::new_v4(),
            name: request.society_name.clone(),
            description: request.description.clone(),
            status: SocietyStatus::Active,
            created_by: request.user_id,
            created_at: now,
            updated_at: now,
        };
        let president = SocietyUserRole {
            id: Uuid::new_v4(),
            name: president_name.to_string(),
            user_id: request.user_id,
            society_id: society.id,
            role: SocietyRole::President,
            group_id: None,
            assigned_by: approved_by,
            assigned_at: now,
            updated_at: now,
        };

        let mut approved = request.clone();
        approved.status = SocietyRequestStatus::Approved;
        approved.updated_at = now;

        state.requests.insert(approved.id, approved.clone());
        state.societies.insert(society.id, society.clone());
        state.roles.push(president.clone());

        Ok(ApprovedSocietyRequest {
            request: approved,
            society,
            president,
        })
    }

    async fn reject(
        &self,
        request_id: Uuid,
        reason: &str,
    ) -> Result<SocietyRequest, SocietyRequestRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .get_mut(&request_id)
            .ok_or(SocietyRequestRepositoryError::RequestNotFound)?;
        if request.status.is_resolved() {
            return Err(SocietyRequestRepositoryError::AlreadyResolved);
        }
        request.status = SocietyRequestStatus::Rejected;
        request.rejection_reason = Some(reason.to_string());
        request.updated_at = Utc::now();
        Ok(request.clone())
    }
}
