use std::sync::Arc;

use crate::society::application::ports::incoming::use_cases::{
    ApproveSocietyRequestUseCase, CreateSocietyRequestUseCase, RejectSocietyRequestUseCase,
    SetSocietyStatusUseCase,
};

#[derive(Clone)]
pub struct SocietyUseCases {
    pub create_request: Arc<dyn CreateSocietyRequestUseCase + Send + Sync>,
    pub approve_request: Arc<dyn ApproveSocietyRequestUseCase + Send + Sync>,
    pub reject_request: Arc<dyn RejectSocietyRequestUseCase + Send + Sync>,
    pub set_status: Arc<dyn SetSocietyStatusUseCase + Send + Sync>,
}
