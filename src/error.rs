use std::fmt;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Which upstream resource a failed request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    TopMarkets,
    Trending,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopMarkets => write!(f, "cryptocurrency data"),
            Self::Trending => write!(f, "trending cryptocurrency data"),
        }
    }
}

/// Underlying reason an upstream request failed.
#[derive(Error, Debug)]
pub enum UpstreamCause {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The market-data provider could not serve a request.
///
/// The display text is safe to show to chat users; the cause is only
/// reachable through [`std::error::Error::source`] and is meant for logs.
#[derive(Error, Debug)]
#[error("Unable to fetch {resource}")]
pub struct UpstreamUnavailable {
    pub resource: Resource,
    #[source]
    pub cause: UpstreamCause,
}

impl UpstreamUnavailable {
    #[must_use]
    pub fn new(resource: Resource, cause: impl Into<UpstreamCause>) -> Self {
        Self {
            resource,
            cause: cause.into(),
        }
    }
}

/// Chat transport errors.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The inbound event-delivery mechanism reported an error.
    #[error("polling error: {0}")]
    Polling(String),

    #[error("failed to send message: {0}")]
    Send(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upstream(#[from] UpstreamUnavailable),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
