//! Error types shared between the fetchers and the application.
//!
//! The `LookupError` enum unifies transport, decoding and configuration failures
//! with the two domain outcomes the workflow reacts to: a quote that could not be
//! found and news that is unavailable.
use thiserror::Error;

/// Unified error type shared by the library and the application.
#[derive(Error, Debug)]
pub enum LookupError {
    /// HTTP transport error raised by `reqwest` (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while decoding a response body via serde_json.
    #[error("JSON deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A configured endpoint could not be parsed as a URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured endpoint parsed but cannot carry path segments.
    #[error("Invalid endpoint base: {0}")]
    InvalidBase(String),

    /// The remote API answered with a non-success status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the status, with the API key redacted.
        url: String,
    },

    /// The quote endpoint produced no usable quote for the symbol.
    #[error("No stock data found: {symbol} ({detail})")]
    QuoteNotFound {
        /// Symbol the user searched for.
        symbol: String,
        /// Underlying cause in human-readable form.
        detail: String,
    },

    /// The news endpoint produced no usable articles for the symbol.
    #[error("No news articles found: {symbol} ({detail})")]
    NewsUnavailable {
        /// Symbol the user searched for.
        symbol: String,
        /// Underlying cause in human-readable form.
        detail: String,
    },

    /// Channel send failed (e.g., the display loop is gone); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., all senders closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// Process setup failed (signal handler, logger, ...).
    #[error("Setup error: {0}")]
    Setup(String),
}

impl LookupError {
    /// Wraps any failure met while fetching a quote into `QuoteNotFound`.
    pub fn quote_not_found(symbol: &str, cause: impl std::fmt::Display) -> Self {
        LookupError::QuoteNotFound {
            symbol: symbol.to_string(),
            detail: cause.to_string(),
        }
    }

    /// Wraps any failure met while fetching news into `NewsUnavailable`.
    pub fn news_unavailable(symbol: &str, cause: impl std::fmt::Display) -> Self {
        LookupError::NewsUnavailable {
            symbol: symbol.to_string(),
            detail: cause.to_string(),
        }
    }
}
