//! Market data port.

use async_trait::async_trait;

use crate::domain::{MarketEntry, TrendingEntry};
use crate::error::UpstreamUnavailable;

/// Source of cryptocurrency market data.
///
/// Implementations perform one outbound request per call. They never retry,
/// cache, or rate-limit, and a failure carries no partial data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch up to `limit` coins ordered by descending market capitalization.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamUnavailable`] when the request fails, the provider
    /// answers with a non-success status, or the body cannot be decoded.
    async fn top_markets(&self, limit: usize) -> Result<Vec<MarketEntry>, UpstreamUnavailable>;

    /// Fetch the first `limit` trending coins in provider order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`top_markets`](Self::top_markets).
    async fn trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, UpstreamUnavailable>;
}
