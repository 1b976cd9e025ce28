//! BotConfig: BaseConfig + shortening endpoint config. Use load() for env-based loading.

use anyhow::{Context, Result};
use shortener::{EnvShortenerConfig, ShortenerConfig};

use super::BaseConfig;

/// Bot config: Telegram/logging plus the shortening endpoint. Nothing has a credential default.
pub struct BotConfig {
    pub base: BaseConfig,
    pub shortener: EnvShortenerConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let shortener = EnvShortenerConfig::from_env().context("Invalid shortener config")?;
        Ok(Self { base, shortener })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.shortener.validate().context("Invalid shortener config")?;
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn shortener(&self) -> &dyn ShortenerConfig {
        &self.shortener
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
