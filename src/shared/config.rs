use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Server and database settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let config = Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port: parsed("PORT", None)?,
            db_max_connections: parsed("DB_MAX_CONNECTIONS", Some(50))?,
            db_min_connections: parsed("DB_MIN_CONNECTIONS", Some(10))?,
        };

        if config.db_min_connections > config.db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(config)
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn parsed<T>(key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match (env::var(key), default) {
        (Ok(raw), _) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("is not valid: {}", e),
        }),
        (Err(_), Some(default)) => Ok(default),
        (Err(_), None) => Err(ConfigError::Missing(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_numeric_value_uses_default() {
        let value: u32 = parsed("PORTFOLIO_TEST_UNSET_POOL_SIZE", Some(7)).unwrap();

        assert_eq!(value, 7);
    }

    #[test]
    fn missing_required_numeric_value_is_reported() {
        let result: Result<u16, _> = parsed("PORTFOLIO_TEST_UNSET_PORT", None);

        assert!(matches!(
            result,
            Err(ConfigError::Missing("PORTFOLIO_TEST_UNSET_PORT"))
        ));
    }

    #[test]
    fn unparsable_value_is_invalid() {
        std::env::set_var("PORTFOLIO_TEST_BAD_PORT", "eighty");

        let result: Result<u16, _> = parsed("PORTFOLIO_TEST_BAD_PORT", None);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "PORTFOLIO_TEST_BAD_PORT",
                ..
            })
        ));
    }
}
