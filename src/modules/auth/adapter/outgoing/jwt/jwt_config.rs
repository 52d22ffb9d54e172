use std::env;

use crate::config::{required, ConfigError};

/// HS256 needs at least 256 bits of key material.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    pub fn new(secret_key: String, issuer: String) -> Result<Self, ConfigError> {
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LEN),
            });
        }

        Ok(Self { secret_key, issuer })
    }

    /// A missing or short `JWT_SECRET` is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "society-portal".to_string());

        Self::new(secret_key, issuer)
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .finish()
    }
}
