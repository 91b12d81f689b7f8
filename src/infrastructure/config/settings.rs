//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Settings come from an optional TOML file; the bot token is always taken
//! from the `TELEGRAM_BOT_TOKEN` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use coinwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::commands::{CommandsConfig, MAX_TOP_LIMIT};
use super::logging::LoggingConfig;
use super::telegram::{TelegramAppConfig, BOT_TOKEN_ENV};
use crate::adapter::outbound::coingecko::CoinGeckoConfig;
use crate::error::{ConfigError, Result};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "COINWATCH_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Market data API settings.
    #[serde(default)]
    pub coingecko: CoinGeckoConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Result sizes for `/top` and `/hot`.
    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the bot token from the `TELEGRAM_BOT_TOKEN` environment variable
    /// (never from the config file).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_with_token(content, std::env::var(BOT_TOKEN_ENV).ok())
    }

    /// Parse configuration from TOML content with an explicit token.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_with_token(content: &str, bot_token: Option<String>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.telegram.bot_token = bot_token;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration for the running process.
    ///
    /// Reads the file named by `COINWATCH_CONFIG`, which must exist when set.
    /// Otherwise reads `config.toml` if present and falls back to defaults.
    ///
    /// # Errors
    ///
    /// Same conditions as [`load`](Self::load).
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load(DEFAULT_CONFIG_PATH),
            None => Self::parse_toml(""),
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.telegram.bot_token().is_none() {
            return Err(ConfigError::MissingField {
                field: BOT_TOKEN_ENV,
            }
            .into());
        }

        let base_url = self.coingecko.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(e) = Url::parse(base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.coingecko.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.coingecko.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.commands.top_limit == 0 || self.commands.top_limit > MAX_TOP_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "top_limit",
                reason: format!("must be between 1 and {MAX_TOP_LIMIT}"),
            }
            .into());
        }
        if self.commands.trending_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "trending_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
