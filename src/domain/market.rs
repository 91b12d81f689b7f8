//! Market data records produced by a market-data provider.

use rust_decimal::Decimal;

/// One coin from the market-listing endpoint.
///
/// Numeric fields are optional: a provider that returns a missing or
/// malformed value yields `None`, which formatting renders as `N/A`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEntry {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Price in USD.
    pub current_price: Option<Decimal>,
    /// Market capitalization in USD.
    pub market_cap: Option<Decimal>,
    /// Percentage price change over the last 24 hours.
    pub price_change_percentage_24h: Option<Decimal>,
}

/// One coin from the trending list.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingEntry {
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    /// Provider-assigned trending score.
    pub score: Option<Decimal>,
}
