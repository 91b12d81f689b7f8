//! Exchange-agnostic domain types.
//!
//! Every value here is built for a single request/response cycle and is
//! immutable once constructed.

mod chat;
mod command;
mod market;

pub use chat::ChatId;
pub use command::{parse_command, Command, CommandParseError};
pub use market::{MarketEntry, TrendingEntry};
