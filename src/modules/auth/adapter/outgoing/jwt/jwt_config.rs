use std::env;

use crate::shared::config::ConfigError;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        Self::new(
            secret_key,
            env::var("JWT_ISSUER").unwrap_or_else(|_| "Ekstion".to_string()),
        )
    }

    pub fn new(secret_key: String, issuer: String) -> Result<Self, ConfigError> {
        // HS256 requires at least 32 bytes
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LEN),
            });
        }
        Ok(Self { secret_key, issuer })
    }
}
