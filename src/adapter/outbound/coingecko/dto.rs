//! CoinGecko REST response types.
//!
//! Per-record fields are decoded leniently: a field that is missing, null,
//! or of the wrong type becomes `None` instead of failing the whole payload.
//! Numbers are accepted either as JSON numbers or as numeric strings.
//!
//! Example `/coins/markets` record:
//! ```json
//! {"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":67234.5,
//!  "market_cap":1323000000000,"price_change_percentage_24h":-1.25}
//! ```

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{MarketEntry, TrendingEntry};

const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_SYMBOL: &str = "N/A";

/// One record from `/coins/markets`.
#[derive(Debug, Deserialize)]
pub struct CoinMarket {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub current_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub market_cap: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_change_percentage_24h: Option<Decimal>,
}

impl From<CoinMarket> for MarketEntry {
    fn from(coin: CoinMarket) -> Self {
        let id = coin.id.unwrap_or_default();
        let name = coin.name.unwrap_or_else(|| display_name(&id));
        Self {
            id,
            name,
            symbol: coin.symbol.unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
            current_price: coin.current_price,
            market_cap: coin.market_cap,
            price_change_percentage_24h: coin.price_change_percentage_24h,
        }
    }
}

/// Body of `/search/trending`.
#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub coins: Option<Vec<TrendingCoin>>,
}

impl TrendingResponse {
    /// First `limit` trending coins in provider order.
    ///
    /// Wrappers without an `item` object are skipped.
    #[must_use]
    pub fn into_entries(self, limit: usize) -> Vec<TrendingEntry> {
        self.coins
            .unwrap_or_default()
            .into_iter()
            .filter_map(|coin| coin.item)
            .take(limit)
            .map(TrendingEntry::from)
            .collect()
    }
}

/// Wrapper object around each trending coin.
#[derive(Debug, Deserialize)]
pub struct TrendingCoin {
    #[serde(default)]
    pub item: Option<TrendingItem>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub score: Option<Decimal>,
}

impl From<TrendingItem> for TrendingEntry {
    fn from(item: TrendingItem) -> Self {
        let id = item.id.unwrap_or_default();
        Self {
            name: item.name.unwrap_or_else(|| display_name(&id)),
            symbol: item.symbol.unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
            market_cap_rank: item.market_cap_rank,
            score: item.score,
        }
    }
}

fn display_name(id: &str) -> String {
    if id.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        id.to_string()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(decimal_from_value)
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_u32()))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
