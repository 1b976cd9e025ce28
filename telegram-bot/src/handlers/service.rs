//! Actions shared by the command, callback and link handlers: shorten-and-reply plus the
//! informational replies (welcome, help, stats, about).

use std::sync::Arc;

use shortener::{ShortenClient, UserStats};
use tracing::{info, instrument, warn};

use crate::core::{Bot, Menu, Message, Result};
use crate::replies;

/// Owns the shortening client, the usage counters and the outbound bot.
pub struct ShortenService {
    client: ShortenClient,
    stats: Arc<UserStats>,
    bot: Arc<dyn Bot>,
}

impl ShortenService {
    pub fn new(client: ShortenClient, stats: Arc<UserStats>, bot: Arc<dyn Bot>) -> Self {
        Self { client, stats, bot }
    }

    /// Shortens `input` for the sender of `message` and replies with the result.
    ///
    /// On success the sender's counter is incremented and the after-shorten menu is attached.
    /// Shortening failures become a reply, not an error; only a failed send is an `Err`.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn shorten_and_reply(&self, message: &Message, input: &str) -> Result<String> {
        match self.client.shorten(input).await {
            Ok(short_url) => {
                let count = self.stats.record_success(message.user.id);
                info!(short_url = %short_url, user_count = count, "step: shortened");
                let text = replies::shortened(&short_url);
                self.bot
                    .send_menu(&message.chat, &text, Menu::AfterShorten)
                    .await?;
                Ok(text)
            }
            Err(e) => {
                warn!(url = %input, kind = ?e.kind(), reason = %e, "Shortening failed");
                let text = replies::shorten_failed(e.kind(), input.trim());
                self.bot.send_message(&message.chat, &text).await?;
                Ok(text)
            }
        }
    }

    pub async fn send_welcome(&self, message: &Message) -> Result<String> {
        let text = replies::greeting(&message.user.display_name());
        self.bot.send_menu(&message.chat, &text, Menu::Main).await?;
        Ok(text)
    }

    pub async fn send_help(&self, message: &Message) -> Result<String> {
        let text = replies::help();
        self.bot.send_menu(&message.chat, &text, Menu::Main).await?;
        Ok(text)
    }

    pub async fn send_stats(&self, message: &Message) -> Result<String> {
        let text = replies::stats(self.stats.get_count(message.user.id), self.stats.total());
        self.bot.send_message(&message.chat, &text).await?;
        Ok(text)
    }

    pub async fn send_about(&self, message: &Message) -> Result<String> {
        self.send_text(message, replies::ABOUT).await
    }

    pub async fn send_text(&self, message: &Message, text: &str) -> Result<String> {
        self.bot.send_message(&message.chat, text).await?;
        Ok(text.to_string())
    }
}
