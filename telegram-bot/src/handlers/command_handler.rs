//! Handles slash commands: /start, /help, /stats, /about, /shorten <url>.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::ShortenService;
use crate::commands::{command_name, is_for_other_bot, parse_command, Command};
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::replies;

/// Replies to text messages starting with `/`. Other messages, and commands addressed to a
/// different bot (`/help@other_bot`), are ignored.
pub struct CommandHandler {
    service: Arc<ShortenService>,
    /// Filled from getMe at startup; used to accept `/cmd@this_bot` in groups.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(service: Arc<ShortenService>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            service,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        let username = self.bot_username.read().await.clone();
        if is_for_other_bot(&message.content, username.as_deref()) {
            debug!("Command addressed to another bot, ignored");
            return Ok(HandlerResponse::Ignore);
        }
        let command = parse_command(&message.content, username.as_deref());
        info!(command = ?command, "step: CommandHandler");

        let text = match command {
            Some(Command::Start) => self.service.send_welcome(message).await?,
            Some(Command::Help) => self.service.send_help(message).await?,
            Some(Command::Stats) => self.service.send_stats(message).await?,
            Some(Command::About) => self.service.send_about(message).await?,
            Some(Command::Shorten(arg)) if !arg.trim().is_empty() => {
                self.service.shorten_and_reply(message, arg.trim()).await?
            }
            Some(Command::Shorten(_)) => {
                self.service.send_text(message, replies::SHORTEN_USAGE).await?
            }
            // `/shorten` with no argument may not parse at all
            None if command_name(&message.content) == Some("shorten") => {
                self.service.send_text(message, replies::SHORTEN_USAGE).await?
            }
            None => self.service.send_text(message, replies::UNKNOWN_COMMAND).await?,
        };

        Ok(HandlerResponse::Reply(text))
    }
}
