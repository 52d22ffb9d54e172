pub mod create_group;
pub mod list_groups;

pub use create_group::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase};
pub use list_groups::{ListGroupsError, ListGroupsUseCase};
