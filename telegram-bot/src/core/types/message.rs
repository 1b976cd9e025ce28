//! Message and kind types for the core model.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// What produced the message: typed text, or a keyboard button press whose tag is in `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Callback,
}

/// A single inbound update with user, chat and content.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True for text starting with `/`.
    pub fn is_command(&self) -> bool {
        self.kind == MessageKind::Text && self.content.trim_start().starts_with('/')
    }
}
