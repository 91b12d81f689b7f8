//! Scripted market-data provider.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{MarketEntry, TrendingEntry};
use crate::error::{Resource, UpstreamCause, UpstreamUnavailable};
use crate::port::outbound::market_data::MarketDataProvider;

/// Canned answer for one endpoint.
#[derive(Debug, Clone)]
enum Outcome<T> {
    Entries(Vec<T>),
    Unavailable,
}

/// Provider that returns pre-set results and records requested limits.
///
/// Both endpoints answer with an empty list until scripted.
#[derive(Debug)]
pub struct ScriptedMarketData {
    top: Outcome<MarketEntry>,
    trending: Outcome<TrendingEntry>,
    requests: Mutex<Vec<(Resource, usize)>>,
}

impl Default for ScriptedMarketData {
    fn default() -> Self {
        Self {
            top: Outcome::Entries(Vec::new()),
            trending: Outcome::Entries(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top(mut self, entries: Vec<MarketEntry>) -> Self {
        self.top = Outcome::Entries(entries);
        self
    }

    pub fn with_trending(mut self, entries: Vec<TrendingEntry>) -> Self {
        self.trending = Outcome::Entries(entries);
        self
    }

    /// Make `/coins/markets` fail with a 503.
    pub fn top_unavailable(mut self) -> Self {
        self.top = Outcome::Unavailable;
        self
    }

    /// Make `/search/trending` fail with a 503.
    pub fn trending_unavailable(mut self) -> Self {
        self.trending = Outcome::Unavailable;
        self
    }

    /// Every `(resource, limit)` pair requested so far.
    pub fn requests(&self) -> Vec<(Resource, usize)> {
        self.requests.lock().expect("lock requests").clone()
    }

    fn record(&self, resource: Resource, limit: usize) {
        self.requests
            .lock()
            .expect("lock requests")
            .push((resource, limit));
    }
}

fn answer<T: Clone>(
    outcome: &Outcome<T>,
    resource: Resource,
    limit: usize,
) -> Result<Vec<T>, UpstreamUnavailable> {
    match outcome {
        Outcome::Entries(entries) => Ok(entries.iter().take(limit).cloned().collect()),
        Outcome::Unavailable => Err(UpstreamUnavailable::new(
            resource,
            UpstreamCause::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
        )),
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedMarketData {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn top_markets(&self, limit: usize) -> Result<Vec<MarketEntry>, UpstreamUnavailable> {
        self.record(Resource::TopMarkets, limit);
        answer(&self.top, Resource::TopMarkets, limit)
    }

    async fn trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, UpstreamUnavailable> {
        self.record(Resource::Trending, limit);
        answer(&self.trending, Resource::Trending, limit)
    }
}
