use std::sync::Arc;

use crate::membership::application::ports::incoming::use_cases::{
    AssignRoleUseCase, ListRolesUseCase,
};

#[derive(Clone)]
pub struct MembershipUseCases {
    pub assign_role: Arc<dyn AssignRoleUseCase + Send + Sync>,
    pub list_roles: Arc<dyn ListRolesUseCase + Send + Sync>,
}
