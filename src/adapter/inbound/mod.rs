//! Inbound (driving) adapters.

pub mod telegram;
