//! Coinwatch - a Telegram bot for cryptocurrency market data.
//!
//! Answers four chat commands by fetching data from the CoinGecko REST API
//! and replying with formatted text:
//!
//! - `/top` - Top coins by market capitalization
//! - `/hot` - Trending coins
//! - `/start`, `/help` - Static command lists
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Market records and the [`Command`](domain::Command) enum
//! - [`port`] - `MarketDataProvider` and `ChatTransport` traits
//! - [`application`] - Command dispatch and pure response formatting
//! - [`adapter`] - CoinGecko (`reqwest`) and Telegram (`teloxide`) implementations
//! - [`infrastructure`] - Configuration, logging, and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! Each inbound message is handled independently; handlers share only
//! immutable handles built once at startup.
//!
//! # Example
//!
//! ```no_run
//! use coinwatch::infrastructure::{bootstrap, config::settings::Config};
//!
//! # async fn example() -> coinwatch::error::Result<()> {
//! let config = Config::from_env()?;
//! config.init_logging();
//! bootstrap::run(config).await
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
