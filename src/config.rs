use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
pub fn load_dotenv() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
    env_name
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub fn parsed_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = required("HOST")?;
        let port = required("PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?;

        Ok(Self {
            host,
            port,
            database_url: required("DATABASE_URL")?,
            max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 50)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outbound mail settings. `Local` targets Mailpit or MailHog in test setups.
#[derive(Debug, Clone)]
pub enum SmtpConfig {
    Relay {
        server: String,
        username: String,
        password: String,
        from_email: String,
    },
    Local {
        host: String,
        port: u16,
        from_email: String,
    },
}

impl SmtpConfig {
    pub fn from_env(env_name: &str) -> Result<Self, ConfigError> {
        let from_email = required("EMAIL_FROM")?;

        if env_name == "test" {
            return Ok(SmtpConfig::Local {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parsed_or("SMTP_PORT", 1025)?,
                from_email,
            });
        }

        Ok(SmtpConfig::Relay {
            server: required("SMTP_SERVER")?,
            username: required("SMTP_USERNAME")?,
            password: required("SMTP_PASSWORD")?,
            from_email,
        })
    }
}
