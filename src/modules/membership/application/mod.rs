pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;

mod membership_use_cases;
pub use membership_use_cases::MembershipUseCases;
