//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use shortener_bot::{Chat, Message, MessageKind, User};

pub const USER_ID: i64 = 123;
pub const CHAT_ID: i64 = 456;

fn message(content: &str, kind: MessageKind, user_id: i64, chat_type: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: user_id,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: chat_type.to_string(),
        },
        kind,
        created_at: Utc::now(),
    }
}

/// Text message from [`USER_ID`] in a private chat.
pub fn text_message(content: &str) -> Message {
    message(content, MessageKind::Text, USER_ID, "private")
}

/// Text message from `user_id` in a private chat.
pub fn text_message_from(user_id: i64, content: &str) -> Message {
    message(content, MessageKind::Text, user_id, "private")
}

/// Text message from [`USER_ID`] in a group chat.
pub fn group_message(content: &str) -> Message {
    message(content, MessageKind::Text, USER_ID, "group")
}

/// Button press carrying `tag`.
pub fn callback(tag: &str) -> Message {
    message(tag, MessageKind::Callback, USER_ID, "private")
}
