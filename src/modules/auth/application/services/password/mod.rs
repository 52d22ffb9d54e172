mod basic_password_policy;

pub use basic_password_policy::{BasicPasswordPolicy, MAX_PASSWORD_CHARS, MIN_PASSWORD_CHARS};
