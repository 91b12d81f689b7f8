//! Builders for domain records used across tests.

use rust_decimal::Decimal;

use crate::domain::{MarketEntry, TrendingEntry};

/// A fully populated [`MarketEntry`].
pub fn market_entry(
    name: &str,
    symbol: &str,
    price: Decimal,
    market_cap: Decimal,
    change_24h: Option<Decimal>,
) -> MarketEntry {
    MarketEntry {
        id: name.to_lowercase(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        current_price: Some(price),
        market_cap: Some(market_cap),
        price_change_percentage_24h: change_24h,
    }
}

/// A [`TrendingEntry`] with rank and score.
pub fn trending_entry(
    name: &str,
    symbol: &str,
    rank: Option<u32>,
    score: Option<Decimal>,
) -> TrendingEntry {
    TrendingEntry {
        name: name.to_string(),
        symbol: symbol.to_string(),
        market_cap_rank: rank,
        score,
    }
}

/// `n` market entries named `Coin0`, `Coin1`, ... with descending caps.
pub fn market_entries(n: usize) -> Vec<MarketEntry> {
    (0..n)
        .map(|i| {
            let cap = Decimal::from(1_000_000_000_u64 * (n - i) as u64);
            market_entry(
                &format!("Coin{i}"),
                &format!("c{i}"),
                Decimal::from(100 + i as u64),
                cap,
                Some(Decimal::ONE),
            )
        })
        .collect()
}
