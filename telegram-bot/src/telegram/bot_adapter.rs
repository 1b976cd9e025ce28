//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Menus are rendered as inline keyboards.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

use crate::core::{Bot as CoreBot, BotError, Chat, Menu, Result};

/// Inline keyboard for `menu`: one button row per menu row, callback data = action tag.
pub fn keyboard(menu: Menu) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(menu.rows().into_iter().map(|row| {
        row.into_iter()
            .map(|action| InlineKeyboardButton::callback(action.label(), action.tag()))
            .collect::<Vec<_>>()
    }))
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, menu: Menu) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .reply_markup(keyboard(menu))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
