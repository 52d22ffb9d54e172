pub mod society_role_query;
pub mod society_role_repository;

pub use society_role_query::{SocietyRoleQuery, SocietyRoleQueryError};
pub use society_role_repository::{SocietyRoleRepository, SocietyRoleRepositoryError};
