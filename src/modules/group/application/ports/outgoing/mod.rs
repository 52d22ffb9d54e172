pub mod group_query;
pub mod group_repository;

pub use group_query::{GroupQuery, GroupQueryError};
pub use group_repository::{GroupRepository, GroupRepositoryError, NewGroup};
