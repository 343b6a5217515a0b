//! Telegram-facing layer: bot setup, dispatcher schema and the transport
//! the delivery workflow talks through.

pub mod bot;
pub mod schema;
pub mod transport;

pub use bot::{create_bot, setup_bot_commands, Command};
pub use schema::{schema, HandlerDeps, HandlerError};
pub use transport::TelegramChat;
