//! Core types and traits: Handler, Bot, Message, Menu, HandlerResponse, error, logger.
//! Transport-agnostic; the `telegram` module adapts teloxide to these.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Menu, MenuAction, Message, MessageKind,
    ToCoreMessage, ToCoreUser, User,
};
