mod create_group;
mod list_groups;
mod responses;

pub use create_group::{__path_create_group_handler, create_group_handler, CreateGroupBody};
pub use list_groups::{__path_list_groups_handler, list_groups_handler};
pub use responses::GroupResponse;
