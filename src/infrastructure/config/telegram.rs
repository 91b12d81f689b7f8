//! Telegram bot configuration.

use std::fmt;

use serde::Deserialize;

/// Environment variable holding the Bot API token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

const fn default_true() -> bool {
    true
}

/// Telegram bot configuration.
///
/// The token is never read from the config file and is redacted from
/// `Debug` output.
#[derive(Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Publish the "/" command menu on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
    /// Bot API token obtained from BotFather, loaded from [`BOT_TOKEN_ENV`].
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl TelegramAppConfig {
    /// The token, if one was supplied and is not blank.
    #[must_use]
    pub fn bot_token(&self) -> Option<&str> {
        self.bot_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

impl fmt::Debug for TelegramAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramAppConfig")
            .field("register_commands", &self.register_commands)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            register_commands: default_true(),
            bot_token: None,
        }
    }
}
