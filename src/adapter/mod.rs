//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Drivers that feed commands into the application (Telegram polling)
//! - [`outbound`] - Market data and chat transport implementations

pub mod inbound;
pub mod outbound;
