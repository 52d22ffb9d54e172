mod approve_society_request_service;
mod create_society_request_service;
mod reject_society_request_service;
mod set_society_status_service;

pub use approve_society_request_service::ApproveSocietyRequestService;
pub use create_society_request_service::CreateSocietyRequestService;
pub use reject_society_request_service::RejectSocietyRequestService;
pub use set_society_status_service::SetSocietyStatusService;
