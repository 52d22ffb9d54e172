pub mod assign_role;
pub mod list_roles;

pub use assign_role::{AssignRoleCommand, AssignRoleError, AssignRoleUseCase};
pub use list_roles::{ListRolesError, ListRolesUseCase};
