//! Chat identity type for core messages.

/// Chat identity. `chat_type` is one of `private`, `group`, `supergroup`, `channel`.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    /// One-to-one chat with the bot; hints for plain text are only sent here.
    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }
}
