//! Outbound adapters implementing [`port::outbound`](crate::port::outbound).

pub mod coingecko;
pub mod telegram;
