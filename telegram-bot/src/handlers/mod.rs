//! Handler implementations: logging, commands, keyboard callbacks, free-text links.

mod callback_handler;
mod command_handler;
mod link_handler;
mod logging_handler;
mod service;

pub use callback_handler::CallbackHandler;
pub use command_handler::CommandHandler;
pub use link_handler::{urls_in, LinkHandler, MAX_URLS_PER_MESSAGE};
pub use logging_handler::LoggingHandler;
pub use service::ShortenService;
