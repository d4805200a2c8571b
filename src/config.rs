use std::env;
use std::fmt;

use crate::types::error::ConfigError;

#[derive(Clone)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("port", &self.port)
            .field("db_url", &self.db_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        match env::var(key) {
            Ok(v) if !v.is_empty() => Ok(v),
            _ => Err(ConfigError::Missing(key)),
        }
    }

    fn get_env_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T::Err: fmt::Display,
    {
        match env::var(key) {
            Ok(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid(key, e.to_string())),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            port: Self::get_env_or("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            jwt_secret: Self::get_env("JWT_SECRET")?,
            token_ttl_secs: Self::get_env_or("TOKEN_TTL_SECS", 86_400)?,
        })
    }
}
