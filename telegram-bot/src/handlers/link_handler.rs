//! Handles free text: every URL-shaped substring is shortened independently.

use std::sync::Arc;

use async_trait::async_trait;
use shortener::{extract_urls, is_valid, normalize};
use tracing::{info, instrument, warn};

use super::ShortenService;
use crate::core::{Handler, HandlerResponse, Message, MessageKind, Result};
use crate::replies;

/// Upper bound on shortening attempts triggered by one message.
pub const MAX_URLS_PER_MESSAGE: usize = 5;

/// URLs to shorten for `text`: embedded links, or the whole text when it is a single bare host.
pub fn urls_in(text: &str) -> Vec<String> {
    let mut urls = extract_urls(text);
    if urls.is_empty() {
        let trimmed = text.trim();
        if !trimmed.contains(char::is_whitespace) && is_valid(&normalize(trimmed)) {
            urls.push(trimmed.to_string());
        }
    }
    urls.truncate(MAX_URLS_PER_MESSAGE);
    urls
}

pub struct LinkHandler {
    service: Arc<ShortenService>,
}

impl LinkHandler {
    pub fn new(service: Arc<ShortenService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Handler for LinkHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Text || message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        let urls = urls_in(&message.content);
        info!(url_count = urls.len(), "step: LinkHandler");

        if urls.is_empty() {
            // Stay quiet in groups; people talk there without addressing the bot.
            if !message.chat.is_private() {
                return Ok(HandlerResponse::Ignore);
            }
            let text = self.service.send_text(message, replies::NO_URL_FOUND).await?;
            return Ok(HandlerResponse::Reply(text));
        }

        // A failed send for one link does not cancel the rest; the first error is reported
        // once every link has been tried.
        let mut sent = Vec::with_capacity(urls.len());
        let mut first_error = None;
        for url in &urls {
            match self.service.shorten_and_reply(message, url).await {
                Ok(text) => sent.push(text),
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to send shortening reply");
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(HandlerResponse::Reply(sent.join("\n"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_in_text() {
        assert_eq!(
            urls_in("check https://a.example/x and www.b.example"),
            vec!["https://a.example/x", "www.b.example"]
        );
    }

    #[test]
    fn test_urls_in_bare_host() {
        assert_eq!(urls_in("  example.com  "), vec!["example.com"]);
        assert!(urls_in("hello there").is_empty());
        assert!(urls_in("hello").is_empty());
    }

    #[test]
    fn test_urls_in_is_capped() {
        let text = (0..10)
            .map(|i| format!("https://site{}.example", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(urls_in(&text).len(), MAX_URLS_PER_MESSAGE);
    }
}
