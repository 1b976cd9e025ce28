//! Core types: user, chat, message, menu, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod menu;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use menu::{Menu, MenuAction};
pub use message::{Message, MessageKind};
pub use response::HandlerResponse;
pub use user::User;
