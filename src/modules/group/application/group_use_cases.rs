use std::sync::Arc;

use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, ListGroupsUseCase,
};

#[derive(Clone)]
pub struct GroupUseCases {
    pub create: Arc<dyn CreateGroupUseCase + Send + Sync>,
    pub list: Arc<dyn ListGroupsUseCase + Send + Sync>,
}
