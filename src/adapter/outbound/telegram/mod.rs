//! Telegram outbound adapter.

pub mod transport;

pub use transport::TelegramTransport;
