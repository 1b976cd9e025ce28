//! Outbound side of the bot: sending replies, optionally with a menu keyboard.
//!
//! [`Bot`] is transport-agnostic; `crate::telegram::TelegramBotAdapter` implements it via teloxide
//! and tests substitute a recording mock.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Chat, Menu};

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message with the given menu attached as an inline keyboard.
    async fn send_menu(&self, chat: &Chat, text: &str, menu: Menu) -> Result<()>;
}
