//! Telegram layer: adapters, Bot implementation, dispatcher runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{keyboard, TelegramBotAdapter};
pub use runner::{run_dispatcher, schema, spawn_chain};
