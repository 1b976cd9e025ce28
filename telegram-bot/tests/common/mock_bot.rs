//! Mock implementation of [`shortener_bot::Bot`] for integration tests.
//!
//! Records every outbound message (chat id, text, attached menu) so tests can assert on replies
//! without hitting Telegram. Can be told to start failing after a number of sends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shortener_bot::{Bot, BotError, Chat, Menu, Result};

/// One recorded outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    pub menu: Option<Menu>,
}

/// Mock Bot that records successful sends and counts every attempt.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    attempts: AtomicUsize,
    /// Sends after this many successful ones return an error.
    fail_after: Option<usize>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every send fails.
    pub fn failing() -> Arc<Self> {
        Self::failing_after(0)
    }

    /// The first `n` sends succeed, every later one fails.
    pub fn failing_after(n: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_after: Some(n),
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }

    pub fn last(&self) -> Option<SentRecord> {
        self.sent().last().cloned()
    }

    /// Sends attempted, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn record(&self, chat: &Chat, text: &str, menu: Option<Menu>) -> Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|n| attempt >= n) {
            return Err(BotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            menu,
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, None)
    }

    async fn send_menu(&self, chat: &Chat, text: &str, menu: Menu) -> Result<()> {
        self.record(chat, text, Some(menu))
    }
}
