//! Telegram command listener.
//!
//! Long-polls the Bot API and hands every text message to the
//! [`CommandDispatcher`](crate::application::dispatch::CommandDispatcher).

mod listener;

pub use listener::{bot_commands, TelegramListener};
