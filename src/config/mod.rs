use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::constants::{auth, http};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_expiration: i64,
    pub security_enabled: bool,
    pub request_timeout: u64,
    /// Tracing filter directive; `RUST_LOG` takes precedence
    pub log_level: Option<String>,
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: http::DEFAULT_PORT,
            jwt_secret: String::new(),
            jwt_expiration: auth::JWT_EXPIRATION_SECS,
            security_enabled: true,
            request_timeout: http::REQUEST_TIMEOUT_SECS,
            log_level: None,
            seed_sample_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset keys take their
    /// defaults; set but unparsable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            jwt_secret: lookup("JWT_SECRET").unwrap_or_default(),
            jwt_expiration: parse_or(&lookup, "JWT_EXPIRATION", defaults.jwt_expiration)?,
            security_enabled: parse_or(&lookup, "SECURITY_ENABLED", defaults.security_enabled)?,
            request_timeout: parse_or(&lookup, "REQUEST_TIMEOUT", defaults.request_timeout)?,
            log_level: lookup("LOG_LEVEL").filter(|level| !level.trim().is_empty()),
            seed_sample_data: parse_or(&lookup, "SEED_SAMPLE_DATA", defaults.seed_sample_data)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.security_enabled {
            if self.jwt_secret.is_empty() {
                anyhow::bail!("JWT_SECRET environment variable is required when security is enabled");
            }
            if self.jwt_secret.len() < auth::MIN_SECRET_LENGTH {
                anyhow::bail!(
                    "JWT_SECRET must be at least {} characters",
                    auth::MIN_SECRET_LENGTH
                );
            }
        }
        if self.jwt_expiration <= 0 {
            anyhow::bail!("JWT_EXPIRATION must be positive");
        }
        if self.request_timeout == 0 {
            anyhow::bail!("REQUEST_TIMEOUT must be positive");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
