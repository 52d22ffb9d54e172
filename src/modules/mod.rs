pub mod auth;
pub mod email;
pub mod group;
pub mod membership;
pub mod society;
