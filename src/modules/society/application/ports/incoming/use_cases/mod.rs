mod approve_society_request;
mod create_society_request;
mod reject_society_request;
mod set_society_status;

pub use approve_society_request::{
    ApproveSocietyRequestCommand, ApproveSocietyRequestError, ApproveSocietyRequestUseCase,
};
pub use create_society_request::{
    CreateSocietyRequestCommand, CreateSocietyRequestError, CreateSocietyRequestUseCase,
};
pub use reject_society_request::{
    RejectSocietyRequestCommand, RejectSocietyRequestError, RejectSocietyRequestUseCase,
};
pub use set_society_status::{
    SetSocietyStatusCommand, SetSocietyStatusError, SetSocietyStatusUseCase,
};
