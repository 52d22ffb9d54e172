pub mod domain;
pub mod ports;
pub mod services;
mod society_use_cases;

pub use society_use_cases::SocietyUseCases;
