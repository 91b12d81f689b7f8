//! Command dispatch: parsed command in, chat replies out.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::{parse_command, ChatId, Command, CommandParseError};
use crate::error::UpstreamUnavailable;
use crate::port::outbound::chat::{ChatTransport, TextFormat};
use crate::port::outbound::market_data::MarketDataProvider;

use super::format::{format_top_markets, format_trending};

/// Default number of coins returned by `/top`.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Default number of coins returned by `/hot`.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Reply to `/start`.
pub const WELCOME_TEXT: &str = "Welcome to the Crypto Info Bot!\n\n\
    Available commands:\n\
    /top - Get top cryptocurrencies by market cap\n\
    /hot - Get trending cryptocurrencies\n\
    /help - Show this help message";

/// Reply to `/help`.
pub const HELP_TEXT: &str = "Crypto Info Bot Commands:\n\
    /top - Get top cryptocurrencies by market cap\n\
    /hot - Get trending cryptocurrencies";

/// Acknowledgement sent before the `/top` upstream call.
pub const FETCHING_TOP_TEXT: &str = "Fetching top cryptocurrencies...";

/// Acknowledgement sent before the `/hot` upstream call.
pub const FETCHING_TRENDING_TEXT: &str = "Fetching trending cryptocurrencies...";

/// Result sizes requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchLimits {
    pub top: usize,
    pub trending: usize,
}

impl Default for DispatchLimits {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_LIMIT,
            trending: DEFAULT_TRENDING_LIMIT,
        }
    }
}

/// Maps commands to (fetch, format, reply) pipelines.
///
/// Holds only shared, immutable handles, so one instance serves every
/// inbound message concurrently.
#[derive(Clone)]
pub struct CommandDispatcher {
    market_data: Arc<dyn MarketDataProvider>,
    transport: Arc<dyn ChatTransport>,
    limits: DispatchLimits,
}

impl CommandDispatcher {
    #[must_use]
    pub fn new(market_data: Arc<dyn MarketDataProvider>, transport: Arc<dyn ChatTransport>) -> Self {
        Self::with_limits(market_data, transport, DispatchLimits::default())
    }

    #[must_use]
    pub fn with_limits(
        market_data: Arc<dyn MarketDataProvider>,
        transport: Arc<dyn ChatTransport>,
        limits: DispatchLimits,
    ) -> Self {
        Self {
            market_data,
            transport,
            limits,
        }
    }

    /// Handle one inbound text message.
    ///
    /// Text that is not a known command gets no reply.
    pub async fn handle_text(&self, chat: ChatId, text: &str) {
        match parse_command(text) {
            Ok(command) => self.dispatch(chat, command).await,
            Err(CommandParseError::NotACommand) => {}
            Err(err @ CommandParseError::UnknownCommand(_)) => {
                debug!(chat_id = chat.get(), error = %err, "Ignoring unknown command");
            }
        }
    }

    /// Run the pipeline for one command.
    pub async fn dispatch(&self, chat: ChatId, command: Command) {
        info!(chat_id = chat.get(), command = %command, "Handling command");

        match command {
            Command::Start => {
                self.reply(chat, WELCOME_TEXT, TextFormat::Plain).await;
            }
            Command::Help => {
                self.reply(chat, HELP_TEXT, TextFormat::Plain).await;
            }
            Command::Top => {
                if !self.reply(chat, FETCHING_TOP_TEXT, TextFormat::Plain).await {
                    return;
                }
                let result = self
                    .market_data
                    .top_markets(self.limits.top)
                    .await
                    .map(|entries| format_top_markets(&entries));
                self.reply_with_result(chat, result).await;
            }
            Command::Hot => {
                if !self
                    .reply(chat, FETCHING_TRENDING_TEXT, TextFormat::Plain)
                    .await
                {
                    return;
                }
                let result = self
                    .market_data
                    .trending(self.limits.trending)
                    .await
                    .map(|entries| format_trending(&entries));
                self.reply_with_result(chat, result).await;
            }
        }
    }

    async fn reply_with_result(&self, chat: ChatId, result: Result<String, UpstreamUnavailable>) {
        match result {
            Ok(text) => {
                self.reply(chat, &text, TextFormat::Markdown).await;
            }
            Err(err) => {
                error!(
                    chat_id = chat.get(),
                    provider = self.market_data.name(),
                    error = %err,
                    cause = %err.cause,
                    "Market data request failed"
                );
                self.reply(chat, &error_reply(&err), TextFormat::Plain)
                    .await;
            }
        }
    }

    /// Send one message; returns whether it was delivered.
    async fn reply(&self, chat: ChatId, text: &str, format: TextFormat) -> bool {
        match self.transport.send_text(chat, text, format).await {
            Ok(()) => true,
            Err(e) => {
                warn!(chat_id = chat.get(), error = %e, "Failed to send reply");
                false
            }
        }
    }
}

fn error_reply(err: &UpstreamUnavailable) -> String {
    format!("Error: {err}")
}
