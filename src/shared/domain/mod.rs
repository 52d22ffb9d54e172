mod errors;

pub use errors::DomainError;
