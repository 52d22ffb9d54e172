mod society_access;

pub use society_access::{ActorStanding, SocietyAccess};
