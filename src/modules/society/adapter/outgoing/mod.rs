pub mod sea_orm_entity;
mod society_query_postgres;
mod society_repository_postgres;
mod society_request_repository_postgres;

pub use society_query_postgres::SocietyQueryPostgres;
pub use society_repository_postgres::SocietyRepositoryPostgres;
pub use society_request_repository_postgres::SocietyRequestRepositoryPostgres;
