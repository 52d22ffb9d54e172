pub mod society_user_roles;
