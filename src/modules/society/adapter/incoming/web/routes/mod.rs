mod approve_society_request;
mod create_society_request;
mod reject_society_request;
mod responses;
mod set_society_status;

pub use approve_society_request::{
    __path_approve_society_request_handler, approve_society_request_handler,
};
pub use create_society_request::{
    __path_create_society_request_handler, create_society_request_handler,
    CreateSocietyRequestBody,
};
pub use reject_society_request::{
    __path_reject_society_request_handler, reject_society_request_handler,
    RejectSocietyRequestBody,
};
pub use responses::{ApprovalResponse, SocietyRequestResponse, SocietyResponse};
pub use set_society_status::{
    __path_set_society_status_handler, set_society_status_handler, SetSocietyStatusBody,
};
