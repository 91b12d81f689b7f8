//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`chat`] — [`RecordingTransport`](chat::RecordingTransport), a
//!   [`ChatTransport`](crate::port::outbound::chat::ChatTransport) that keeps
//!   every outbound message.
//! - [`market`] — [`ScriptedMarketData`](market::ScriptedMarketData), a
//!   provider with canned answers.
//! - [`domain`] — Builders for market records.

pub mod chat;
pub mod domain;
pub mod market;
