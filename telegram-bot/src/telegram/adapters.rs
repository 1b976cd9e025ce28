//! Converters from teloxide updates to core types.

use crate::core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Telegram user to core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else {
        "channel"
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type(chat).to_string(),
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Telegram text message to core message.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            created_at: self.0.date,
        }
    }
}

/// Inline keyboard press to core message; `content` is the callback tag.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl ToCoreMessage for TelegramCallbackWrapper<'_> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        // Inline-mode presses carry no message; the private chat id equals the user id.
        let (id, chat) = match self.0.message.as_ref() {
            Some(m) => (m.id().0.to_string(), core_chat(m.chat())),
            None => (
                String::new(),
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
            ),
        };
        Message {
            id,
            user,
            chat,
            content: self.0.data.clone().unwrap_or_default(),
            kind: MessageKind::Callback,
            created_at: chrono::Utc::now(),
        }
    }
}
