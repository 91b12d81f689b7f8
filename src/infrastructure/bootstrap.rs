//! Composition root: builds every long-lived handle once and injects it.

use std::sync::Arc;

use teloxide::Bot;
use tracing::info;

use crate::adapter::inbound::telegram::TelegramListener;
use crate::adapter::outbound::coingecko::CoinGeckoClient;
use crate::adapter::outbound::telegram::TelegramTransport;
use crate::application::dispatch::CommandDispatcher;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::BOT_TOKEN_ENV;
use crate::port::outbound::chat::ChatTransport;
use crate::port::outbound::market_data::MarketDataProvider;

/// Build the command dispatcher from its collaborators and configuration.
#[must_use]
pub fn build_dispatcher(
    config: &Config,
    market_data: Arc<dyn MarketDataProvider>,
    transport: Arc<dyn ChatTransport>,
) -> CommandDispatcher {
    CommandDispatcher::with_limits(market_data, transport, config.commands.limits())
}

/// Wire the Telegram listener for a validated configuration.
///
/// # Errors
///
/// Returns an error if the token is missing or the HTTP client cannot be built.
#[allow(clippy::result_large_err)]
pub fn build_listener(config: &Config) -> Result<TelegramListener> {
    let token = config.telegram.bot_token().ok_or(ConfigError::MissingField {
        field: BOT_TOKEN_ENV,
    })?;

    let bot = Bot::new(token);
    let market_data: Arc<dyn MarketDataProvider> =
        Arc::new(CoinGeckoClient::from_config(&config.coingecko)?);
    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramTransport::new(bot.clone()));

    info!(
        provider = market_data.name(),
        base_url = %config.coingecko.base_url,
        top_limit = config.commands.top_limit,
        trending_limit = config.commands.trending_limit,
        "Bot wired"
    );

    let dispatcher = build_dispatcher(config, market_data, transport);
    Ok(TelegramListener::new(bot, dispatcher).register_commands(config.telegram.register_commands))
}

/// Run the bot until Ctrl-C.
///
/// # Errors
///
/// Returns an error if wiring fails; runtime failures are logged, not returned.
pub async fn run(config: Config) -> Result<()> {
    let listener = build_listener(&config)?;
    listener.run().await;
    Ok(())
}
