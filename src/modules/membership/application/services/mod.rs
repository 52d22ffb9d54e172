pub mod assign_role_service;
pub mod list_roles_service;

pub use assign_role_service::AssignRoleService;
pub use list_roles_service::ListRolesService;
