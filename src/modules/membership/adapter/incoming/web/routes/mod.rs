mod assign_role;
mod list_roles;
mod responses;

pub use assign_role::{__path_assign_role_handler, assign_role_handler, AssignRoleBody};
pub use list_roles::{__path_list_roles_handler, list_roles_handler};
pub use responses::SocietyRoleResponse;
