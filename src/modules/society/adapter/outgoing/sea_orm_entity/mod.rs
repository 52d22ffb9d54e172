pub mod societies;
pub mod society_requests;
