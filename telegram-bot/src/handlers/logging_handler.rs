//! Logs every update entering the chain and the response it produced.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Always continues; logs in before() and after().
#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            kind = ?message.kind,
            content_len = message.content.len(),
            "Received update"
        );
        // User-submitted links stay out of the log file unless debug is enabled.
        debug!(
            message_id = %message.id,
            sent_at = %message.created_at,
            content = %message.content,
            "Update content"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = text.len(),
                "Replied"
            ),
            other => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                response = ?other,
                "No reply"
            ),
        }
        Ok(())
    }
}
