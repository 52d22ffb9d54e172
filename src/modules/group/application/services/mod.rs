pub mod create_group_service;
pub mod list_groups_service;

pub use create_group_service::CreateGroupService;
pub use list_groups_service::ListGroupsService;
