//! Bot configuration: BaseConfig (Telegram + log) + shortener endpoint config.

mod base;
mod bot_config;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
