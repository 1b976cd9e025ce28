//! Error type for the bot core.

use thiserror::Error;

/// Failure while talking to the chat transport. Shortening failures never surface here; they
/// become replies.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
