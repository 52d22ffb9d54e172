use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    HashedPassword, NewUser, User, UserId, UserRole, UserStatus,
};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, ICreateUserUseCase, RegisterUserCommand,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::set_user_status::{
    ISetUserStatusUseCase, SetUserStatusCommand, SetUserStatusError,
};
use crate::auth::application::use_cases::update_user::{
    IUpdateUserUseCase, UpdateUserCommand, UpdateUserError,
};
use crate::email::application::ports::incoming::use_cases::{
    BulkEmailReport, SendBulkEmailCommand, SendBulkEmailError, SendBulkEmailUseCase,
};
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupCommand, CreateGroupError, CreateGroupUseCase, ListGroupsError, ListGroupsUseCase,
};
use crate::membership::application::domain::entities::SocietyUserRole;
use crate::membership::application::ports::incoming::use_cases::{
    AssignRoleCommand, AssignRoleError, AssignRoleUseCase, ListRolesError, ListRolesUseCase,
};
use crate::society::application::domain::entities::{Society, SocietyRequest};
use crate::society::application::ports::incoming::use_cases::{
    ApproveSocietyRequestCommand, ApproveSocietyRequestError, ApproveSocietyRequestUseCase,
    CreateSocietyRequestCommand, CreateSocietyRequestError, CreateSocietyRequestUseCase,
    RejectSocietyRequestCommand, RejectSocietyRequestError, RejectSocietyRequestUseCase,
    SetSocietyStatusCommand, SetSocietyStatusError, SetSocietyStatusUseCase,
};
use crate::society::application::ports::outgoing::ApprovedSocietyRequest;

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

pub fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: HashedPassword::from_stored("fake$analytical-engine".to_string()),
        status: UserStatus::Active,
        role: UserRole::Member,
        email_verified: false,
        is_active: true,
        password_reset_required: false,
        created_at: now,
        updated_at: now,
    }
}

/// User store backed by a map; serves as both the query and the
/// repository side.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUsers {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.get(UserId::from(user_id)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(UserRepositoryError::DuplicateKey(user.email));
        }

        let now = Utc::now();
        let created = User {
            id: UserId::from(Uuid::new_v4()),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            status: user.status,
            role: user.role,
            email_verified: false,
            is_active: true,
            password_reset_required: false,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn save_user(&self, user: &User) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(&user.id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        *stored = User {
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(stored.clone())
    }
}

/// Reversible "hash" so tests can assert on stored values.
#[derive(Clone, Default)]
pub struct FakeHasher {
    failure: Option<HashError>,
}

impl FakeHasher {
    pub fn failing(error: HashError) -> Self {
        Self {
            failure: Some(error),
        }
    }

    pub fn encode(password: &str) -> String {
        format!("fake${password}")
    }
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Self::encode(password)),
        }
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Self::encode(password) == hash),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Default use cases for TestAppStateBuilder
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetUserStatusUseCase;

#[async_trait]
impl ISetUserStatusUseCase for StubSetUserStatusUseCase {
    async fn execute(&self, _command: SetUserStatusCommand) -> Result<User, SetUserStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateSocietyRequestUseCase;

#[async_trait]
impl CreateSocietyRequestUseCase for StubCreateSocietyRequestUseCase {
    async fn execute(
        &self,
        _command: CreateSocietyRequestCommand,
    ) -> Result<SocietyRequest, CreateSocietyRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubApproveSocietyRequestUseCase;

#[async_trait]
impl ApproveSocietyRequestUseCase for StubApproveSocietyRequestUseCase {
    async fn execute(
        &self,
        _command: ApproveSocietyRequestCommand,
    ) -> Result<ApprovedSocietyRequest, ApproveSocietyRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRejectSocietyRequestUseCase;

#[async_trait]
impl RejectSocietyRequestUseCase for StubRejectSocietyRequestUseCase {
    async fn execute(
        &self,
        _command: RejectSocietyRequestCommand,
    ) -> Result<SocietyRequest, RejectSocietyRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetSocietyStatusUseCase;

#[async_trait]
impl SetSocietyStatusUseCase for StubSetSocietyStatusUseCase {
    async fn execute(
        &self,
        _command: SetSocietyStatusCommand,
    ) -> Result<Society, SetSocietyStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateGroupUseCase;

#[async_trait]
impl CreateGroupUseCase for StubCreateGroupUseCase {
    async fn execute(&self, _command: CreateGroupCommand) -> Result<Group, CreateGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListGroupsUseCase;

#[async_trait]
impl ListGroupsUseCase for StubListGroupsUseCase {
    async fn execute(&self, _society_id: Uuid) -> Result<Vec<Group>, ListGroupsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAssignRoleUseCase;

#[async_trait]
impl AssignRoleUseCase for StubAssignRoleUseCase {
    async fn execute(&self, _command: AssignRoleCommand) -> Result<SocietyUserRole, AssignRoleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListRolesUseCase;

#[async_trait]
impl ListRolesUseCase for StubListRolesUseCase {
    async fn execute(&self, _society_id: Uuid) -> Result<Vec<SocietyUserRole>, ListRolesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSendBulkEmailUseCase;

#[async_trait]
impl SendBulkEmailUseCase for StubSendBulkEmailUseCase {
    async fn execute(
        &self,
        _command: SendBulkEmailCommand,
    ) -> Result<BulkEmailReport, SendBulkEmailError> {
        unimplemented!("Not used in this test")
    }
}
