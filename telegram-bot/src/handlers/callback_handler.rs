//! Handles inline keyboard presses (`help`, `stats`, `about`, `shorten_another`).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ShortenService;
use crate::core::{Handler, HandlerResponse, MenuAction, Message, MessageKind, Result};
use crate::replies;

pub struct CallbackHandler {
    service: Arc<ShortenService>,
}

impl CallbackHandler {
    pub fn new(service: Arc<ShortenService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Handler for CallbackHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, tag = %message.content))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Callback {
            return Ok(HandlerResponse::Ignore);
        }

        let Some(action) = MenuAction::from_tag(&message.content) else {
            debug!("Unknown callback tag, ignored");
            return Ok(HandlerResponse::Stop);
        };

        let text = match action {
            MenuAction::Help => self.service.send_help(message).await?,
            MenuAction::Stats => self.service.send_stats(message).await?,
            MenuAction::About => self.service.send_about(message).await?,
            MenuAction::ShortenAnother => {
                self.service.send_text(message, replies::SEND_ANOTHER).await?
            }
        };
        Ok(HandlerResponse::Reply(text))
    }
}
