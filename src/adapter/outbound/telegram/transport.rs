//! Telegram implementation of the chat transport port.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::domain::ChatId as DomainChatId;
use crate::error::TransportError;
use crate::port::outbound::chat::{ChatTransport, TextFormat};

/// Sends replies through a shared `teloxide` bot handle.
///
/// `Bot` is internally reference-counted, so clones share one HTTP client.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(
        &self,
        chat: DomainChatId,
        text: &str,
        format: TextFormat,
    ) -> Result<(), TransportError> {
        let request = self.bot.send_message(ChatId(chat.get()), text);
        let request = match parse_mode(format) {
            Some(mode) => request.parse_mode(mode),
            None => request,
        };

        request
            .await
            .map(|_| ())
            .map_err(|e| TransportError::Send(e.to_string()))
    }
}

// Replies use the legacy Markdown dialect; the formatter escapes its entity characters.
#[allow(deprecated)]
fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Markdown => Some(ParseMode::Markdown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(deprecated)]
    fn markdown_maps_to_legacy_parse_mode() {
        assert_eq!(parse_mode(TextFormat::Plain), None);
        assert_eq!(parse_mode(TextFormat::Markdown), Some(ParseMode::Markdown));
    }
}
