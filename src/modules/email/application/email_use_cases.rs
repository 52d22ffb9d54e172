use std::sync::Arc;

use crate::email::application::ports::incoming::use_cases::SendBulkEmailUseCase;

#[derive(Clone)]
pub struct EmailUseCases {
    pub send_bulk: Arc<dyn SendBulkEmailUseCase + Send + Sync>,
}
