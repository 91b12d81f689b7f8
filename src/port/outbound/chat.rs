//! Chat transport port.

use async_trait::async_trait;

use crate::domain::ChatId;
use crate::error::TransportError;

/// How the chat client should render an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Bold and code markup enabled.
    Markdown,
}

/// Outbound side of a chat platform.
///
/// Constructed once at startup and shared by every handler; implementations
/// must be safe to call concurrently.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send `text` to `chat`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Send`] if the platform rejects the message.
    async fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        format: TextFormat,
    ) -> Result<(), TransportError>;
}
