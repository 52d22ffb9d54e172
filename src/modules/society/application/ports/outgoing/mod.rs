mod society_query;
mod society_repository;
mod society_request_repository;

pub use society_query::{SocietyQuery, SocietyQueryError};
pub use society_repository::{SocietyRepository, SocietyRepositoryError};
pub use society_request_repository::{
    ApprovedSocietyRequest, NewSocietyRequest, SocietyRequestRepository,
    SocietyRequestRepositoryError,
};
