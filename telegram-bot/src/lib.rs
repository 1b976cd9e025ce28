//! # Link shortener bot
//!
//! Telegram front end for the `shortener` crate. Loads config from env, converts updates into
//! core messages and runs them through a handler chain (logging → commands → callbacks → links).

pub mod chain;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod replies;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Menu, MenuAction, Message,
    MessageKind, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    keyboard, run_dispatcher, TelegramBotAdapter, TelegramCallbackWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};

pub use commands::Command;
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig};
pub use handlers::{
    CallbackHandler, CommandHandler, LinkHandler, LoggingHandler, ShortenService,
    MAX_URLS_PER_MESSAGE,
};
pub use runner::{run_bot, ShortenerBot};
