//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!  ┌───────────┐      ┌──────────────────────┐      ┌────────────┐
//!  │ Telegram  │─────▶│  CommandDispatcher   │─────▶│ MarketData │
//!  │ listener  │      │  (application)       │      │  Provider  │
//!  └───────────┘      └──────────┬───────────┘      └────────────┘
//!                                │
//!                                ▼
//!                         ┌─────────────┐
//!                         │ChatTransport│
//!                         └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::market_data::MarketDataProvider`] - Market listings and trending coins
//! - [`outbound::chat::ChatTransport`] - Replies to the originating chat

pub mod outbound;
