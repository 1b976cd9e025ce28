//! Shortener configuration: trait and env-based implementation.
//!
//! The endpoint base usually embeds an API key, so there is no default: it must come
//! from `SHORTENER_BASE_URL`.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Shortening endpoint configuration.
pub trait ShortenerConfig: Send + Sync {
    /// Endpoint base; the long URL is appended as the `s` query parameter.
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Shortener config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvShortenerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ShortenerConfig for EnvShortenerConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl EnvShortenerConfig {
    /// Loads `SHORTENER_BASE_URL` (required) and `SHORTENER_TIMEOUT_SECS` (default 10).
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("SHORTENER_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("SHORTENER_BASE_URL"))?;
        let timeout_secs = match env::var("SHORTENER_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "SHORTENER_TIMEOUT_SECS",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let config = Self {
            base_url: base_url.trim().to_string(),
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Base URL must parse; timeout must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::Invalid {
                name: "SHORTENER_BASE_URL",
                value: self.base_url.clone(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "SHORTENER_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::set_var("SHORTENER_BASE_URL", "https://short.example/api/key");
        env::remove_var("SHORTENER_TIMEOUT_SECS");

        let config = EnvShortenerConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://short.example/api/key");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        env::remove_var("SHORTENER_BASE_URL");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_base_url() {
        env::remove_var("SHORTENER_BASE_URL");
        let err = EnvShortenerConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SHORTENER_BASE_URL")));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values() {
        env::set_var("SHORTENER_BASE_URL", "not a url");
        env::remove_var("SHORTENER_TIMEOUT_SECS");
        assert!(EnvShortenerConfig::from_env().is_err());

        env::set_var("SHORTENER_BASE_URL", "https://short.example/api");
        env::set_var("SHORTENER_TIMEOUT_SECS", "soon");
        assert!(EnvShortenerConfig::from_env().is_err());

        env::set_var("SHORTENER_TIMEOUT_SECS", "0");
        assert!(EnvShortenerConfig::from_env().is_err());

        env::set_var("SHORTENER_TIMEOUT_SECS", "3");
        assert_eq!(
            EnvShortenerConfig::from_env().unwrap().timeout(),
            Duration::from_secs(3)
        );

        env::remove_var("SHORTENER_BASE_URL");
        env::remove_var("SHORTENER_TIMEOUT_SECS");
    }
}
