//! CoinGecko REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};
use url::Url;

use super::dto::{CoinMarket, TrendingResponse};
use super::settings::CoinGeckoConfig;
use crate::domain::{MarketEntry, TrendingEntry};
use crate::error::{ConfigError, Resource, Result, UpstreamCause, UpstreamUnavailable};
use crate::port::outbound::market_data::MarketDataProvider;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the CoinGecko v3 API.
///
/// Issues exactly one request per call, with no retries or caching.
pub struct CoinGeckoClient {
    http: HttpClient,
    base_url: Url,
}

impl CoinGeckoClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &CoinGeckoConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are checked for cannot-be-a-base at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn markets_url(&self, limit: usize) -> Url {
        let mut url = self.endpoint(&["coins", "markets"]);
        url.query_pairs_mut()
            .append_pair("vs_currency", "usd")
            .append_pair("order", "market_cap_desc")
            .append_pair("per_page", &limit.to_string())
            .append_pair("page", "1")
            .append_pair("sparkline", "false");
        url
    }

    fn trending_url(&self) -> Url {
        self.endpoint(&["search", "trending"])
    }

    async fn get_json<T>(&self, url: Url, resource: Resource) -> std::result::Result<T, UpstreamUnavailable>
    where
        T: serde::de::DeserializeOwned,
    {
        let fail = |cause: UpstreamCause| UpstreamUnavailable::new(resource, cause);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(UpstreamCause::Status(status)));
        }

        let body = response.bytes().await.map_err(|e| fail(e.into()))?;
        serde_json::from_slice(&body).map_err(|e| fail(e.into()))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "base_url",
            reason: format!("`{base_url}` is not an http(s) URL"),
        }
        .into());
    }
    Ok(url)
}

#[async_trait]
impl MarketDataProvider for CoinGeckoClient {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn top_markets(
        &self,
        limit: usize,
    ) -> std::result::Result<Vec<MarketEntry>, UpstreamUnavailable> {
        let url = self.markets_url(limit);
        info!(url = %url, "Fetching top markets");

        let coins: Vec<CoinMarket> = self.get_json(url, Resource::TopMarkets).await?;
        debug!(count = coins.len(), "Fetched top markets");

        Ok(coins.into_iter().map(MarketEntry::from).collect())
    }

    async fn trending(
        &self,
        limit: usize,
    ) -> std::result::Result<Vec<TrendingEntry>, UpstreamUnavailable> {
        let url = self.trending_url();
        info!(url = %url, "Fetching trending coins");

        let response: TrendingResponse = self.get_json(url, Resource::Trending).await?;
        let entries = response.into_entries(limit);
        debug!(count = entries.len(), "Fetched trending coins");

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::coingecko::settings::DEFAULT_BASE_URL;
    use crate::error::Error;

    #[test]
    fn markets_url_has_fixed_query() {
        let client = CoinGeckoClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            client.markets_url(10).as_str(),
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=10&page=1&sparkline=false"
        );
    }

    #[test]
    fn trending_url_appends_path() {
        let client = CoinGeckoClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            client.trending_url().as_str(),
            "https://api.coingecko.com/api/v3/search/trending"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = CoinGeckoClient::new("http://127.0.0.1:8080/api/v3/").unwrap();
        assert_eq!(
            client.trending_url().as_str(),
            "http://127.0.0.1:8080/api/v3/search/trending"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(matches!(
            CoinGeckoClient::new("mailto:ops@example.com"),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "base_url",
                ..
            }))
        ));
        assert!(matches!(
            CoinGeckoClient::new("not a url"),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn provider_name() {
        let client = CoinGeckoClient::from_config(&CoinGeckoConfig::default()).unwrap();
        assert_eq!(client.name(), "coingecko");
    }
}
