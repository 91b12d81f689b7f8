//! Application services (use cases).
//!
//! - [`dispatch`] - Routes parsed commands through the market-data and chat ports
//! - [`format`] - Pure renderers for market listings and trending coins

pub mod dispatch;
pub mod format;
