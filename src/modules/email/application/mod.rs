pub mod ports;
pub mod services;

mod email_use_cases;
pub use email_use_cases::EmailUseCases;
