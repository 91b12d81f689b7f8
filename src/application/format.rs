//! Message formatting for market data replies.
//!
//! Output targets Telegram's legacy Markdown: `*bold*` headers and names,
//! with user-controlled text escaped so it cannot open stray entities.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::{MarketEntry, TrendingEntry};

/// Reply for an empty market listing.
pub const NO_MARKET_DATA: &str = "No cryptocurrency data available.";

/// Reply for an empty trending list.
pub const NO_TRENDING_DATA: &str = "No trending cryptocurrency data available.";

const TOP_HEADER: &str = "🔸 *TOP CRYPTOCURRENCIES* 🔸\n\n";
const TRENDING_HEADER: &str = "🔥 *TRENDING CRYPTOCURRENCIES* 🔥\n\n";

const UP: &str = "🟢";
const DOWN: &str = "🔴";
const NOT_AVAILABLE: &str = "N/A";

const BILLION: Decimal = dec!(1000000000);

/// Render the top-markets reply, one numbered block per entry.
#[must_use]
pub fn format_top_markets(entries: &[MarketEntry]) -> String {
    if entries.is_empty() {
        return NO_MARKET_DATA.to_string();
    }

    let mut response = TOP_HEADER.to_string();
    for (i, entry) in entries.iter().enumerate() {
        let price = entry
            .current_price
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("${}", format_price(p)));
        let market_cap = entry.market_cap.map_or_else(
            || NOT_AVAILABLE.to_string(),
            |cap| format!("${}B", format_billions(cap)),
        );

        response.push_str(&format!(
            "{}. *{}* ({})\n   💰 {}\n   📊 24h: {}\n   🧢 {}\n\n",
            i + 1,
            escape_markdown(&entry.name),
            escape_markdown(&entry.symbol.to_uppercase()),
            price,
            format_change(entry.price_change_percentage_24h),
            market_cap
        ));
    }

    response
}

/// Render the trending reply, one numbered block per entry.
#[must_use]
pub fn format_trending(entries: &[TrendingEntry]) -> String {
    if entries.is_empty() {
        return NO_TRENDING_DATA.to_string();
    }

    let mut response = TRENDING_HEADER.to_string();
    for (i, entry) in entries.iter().enumerate() {
        let rank = entry
            .market_cap_rank
            .map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string());
        let score = entry
            .score
            .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.normalize().to_string());

        response.push_str(&format!(
            "{}. *{}* ({})\n   📈 Market Cap Rank: {}\n   📊 Score: {}\n\n",
            i + 1,
            escape_markdown(&entry.name),
            escape_markdown(&entry.symbol.to_uppercase()),
            rank,
            score
        ));
    }

    response
}

/// Directional indicator followed by the unsigned change, e.g. `🔴 3.46%`.
fn format_change(change: Option<Decimal>) -> String {
    let Some(change) = change else {
        return NOT_AVAILABLE.to_string();
    };
    let indicator = if change >= Decimal::ZERO { UP } else { DOWN };
    format!("{} {:.2}%", indicator, round(change.abs(), 2))
}

/// USD amount with thousands separators.
///
/// Amounts of one dollar or more get two decimals; smaller amounts keep up
/// to six so that sub-cent coins stay readable.
fn format_price(price: Decimal) -> String {
    let plain = if price.abs() >= Decimal::ONE {
        format!("{:.2}", round(price, 2))
    } else {
        round(price, 6).normalize().to_string()
    };
    group_thousands(&plain)
}

fn format_billions(market_cap: Decimal) -> String {
    format!("{:.2}", round(market_cap / BILLION, 2))
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = plain
        .strip_prefix('-')
        .map_or(("", plain), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let digits = int_part.len();
    let mut grouped = String::with_capacity(plain.len() + digits / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Escape characters that open entities in legacy Markdown.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
