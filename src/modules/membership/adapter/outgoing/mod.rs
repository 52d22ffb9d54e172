pub mod sea_orm_entity;
mod society_role_query_postgres;
mod society_role_repository_postgres;

pub use society_role_query_postgres::SocietyRoleQueryPostgres;
pub use society_role_repository_postgres::SocietyRoleRepositoryPostgres;
