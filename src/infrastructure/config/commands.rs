//! Command result sizes.

use serde::Deserialize;

use crate::application::dispatch::{DispatchLimits, DEFAULT_TOP_LIMIT, DEFAULT_TRENDING_LIMIT};

/// Largest page size the market-listing endpoint accepts.
pub const MAX_TOP_LIMIT: usize = 250;

/// Number of coins each market command returns.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Coins listed by `/top` (default: 10).
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
    /// Coins listed by `/hot` (default: 5).
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
}

const fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

const fn default_trending_limit() -> usize {
    DEFAULT_TRENDING_LIMIT
}

impl CommandsConfig {
    #[must_use]
    pub fn limits(&self) -> DispatchLimits {
        DispatchLimits {
            top: self.top_limit,
            trending: self.trending_limit,
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            top_limit: default_top_limit(),
            trending_limit: default_trending_limit(),
        }
    }
}
