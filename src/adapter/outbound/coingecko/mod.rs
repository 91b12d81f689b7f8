//! CoinGecko market data adapter.
//!
//! Implements [`MarketDataProvider`](crate::port::outbound::market_data::MarketDataProvider)
//! over the public CoinGecko v3 REST API.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::CoinGeckoClient;
pub use settings::CoinGeckoConfig;
