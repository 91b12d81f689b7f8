//! Recording chat transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ChatId;
use crate::error::TransportError;
use crate::port::outbound::chat::{ChatTransport, TextFormat};

/// One message handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat: ChatId,
    pub text: String,
    pub format: TextFormat,
}

/// Thread-safe message collector for reply assertions in tests.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    fail_sends: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose sends always fail (nothing is recorded).
    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("lock sent messages").clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock sent messages").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        format: TextFormat,
    ) -> Result<(), TransportError> {
        if self.fail_sends {
            return Err(TransportError::Send("recording transport set to fail".into()));
        }
        self.sent
            .lock()
            .expect("lock sent messages")
            .push(SentMessage {
                chat,
                text: text.to_string(),
                format,
            });
        Ok(())
    }
}
