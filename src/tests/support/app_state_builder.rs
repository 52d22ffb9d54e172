use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::create_user::ICreateUserUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::set_user_status::ISetUserStatusUseCase;
use crate::auth::application::use_cases::update_user::IUpdateUserUseCase;
use crate::email::application::ports::incoming::use_cases::SendBulkEmailUseCase;
use crate::email::application::EmailUseCases;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, ListGroupsUseCase,
};
use crate::group::application::GroupUseCases;
use crate::membership::application::ports::incoming::use_cases::{
    AssignRoleUseCase, ListRolesUseCase,
};
use crate::membership::application::MembershipUseCases;
use crate::society::application::ports::incoming::use_cases::{
    ApproveSocietyRequestUseCase, CreateSocietyRequestUseCase, RejectSocietyRequestUseCase,
    SetSocietyStatusUseCase,
};
use crate::society::application::SocietyUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case panics unless a test
/// replaces it.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    set_user_status: Arc<dyn ISetUserStatusUseCase + Send + Sync>,
    society: SocietyUseCases,
    group: GroupUseCases,
    membership: MembershipUseCases,
    email: EmailUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            set_user_status: Arc::new(StubSetUserStatusUseCase),
            society: SocietyUseCases {
                create_request: Arc::new(StubCreateSocietyRequestUseCase),
                approve_request: Arc::new(StubApproveSocietyRequestUseCase),
                reject_request: Arc::new(StubRejectSocietyRequestUseCase),
                set_status: Arc::new(StubSetSocietyStatusUseCase),
            },
            group: GroupUseCases {
                create: Arc::new(StubCreateGroupUseCase),
                list: Arc::new(StubListGroupsUseCase),
            },
            membership: MembershipUseCases {
                assign_role: Arc::new(StubAssignRoleUseCase),
                list_roles: Arc::new(StubListRolesUseCase),
            },
            email: EmailUseCases {
                send_bulk: Arc::new(StubSendBulkEmailUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ----- auth -----

    pub fn with_register_user(
        mut self,
        uc: impl ICreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(
        mut self,
        uc: impl IUpdateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_set_user_status(
        mut self,
        uc: impl ISetUserStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_user_status = Arc::new(uc);
        self
    }

    // ----- society -----

    pub fn with_create_society_request(
        mut self,
        uc: impl CreateSocietyRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.society.create_request = Arc::new(uc);
        self
    }

    pub fn with_approve_society_request(
        mut self,
        uc: impl ApproveSocietyRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.society.approve_request = Arc::new(uc);
        self
    }

    pub fn with_reject_society_request(
        mut self,
        uc: impl RejectSocietyRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.society.reject_request = Arc::new(uc);
        self
    }

    pub fn with_set_society_status(
        mut self,
        uc: impl SetSocietyStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.society.set_status = Arc::new(uc);
        self
    }

    // ----- group -----

    pub fn with_create_group(mut self, uc: impl CreateGroupUseCase + Send + Sync + 'static) -> Self {
        self.group.create = Arc::new(uc);
        self
    }

    pub fn with_list_groups(mut self, uc: impl ListGroupsUseCase + Send + Sync + 'static) -> Self {
        self.group.list = Arc::new(uc);
        self
    }

    // ----- membership -----

    pub fn with_assign_role(mut self, uc: impl AssignRoleUseCase + Send + Sync + 'static) -> Self {
        self.membership.assign_role = Arc::new(uc);
        self
    }

    pub fn with_list_roles(mut self, uc: impl ListRolesUseCase + Send + Sync + 'static) -> Self {
        self.membership.list_roles = Arc::new(uc);
        self
    }

    // ----- email -----

    pub fn with_send_bulk_email(
        mut self,
        uc: impl SendBulkEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.email.send_bulk = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            update_user_use_case: self.update_user,
            set_user_status_use_case: self.set_user_status,
            society: self.society,
            group: self.group,
            membership: self.membership,
            email: self.email,
        })
    }
}
