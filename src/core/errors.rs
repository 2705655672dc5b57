//! Custom error types for translation and dictionary operations

use thiserror::Error;

/// Errors raised while building, sending or decoding a request
#[derive(Error, Debug)]
pub enum YandexError {
    /// The service answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying client error
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Request URI could not be assembled
    #[error("Invalid request URI: {message}")]
    InvalidUri {
        /// Why the URI was rejected
        message: String,
    },

    /// Translation body did not carry the expected `<text>` markers
    #[error("Invalid translation response: {message}")]
    TranslationParseError {
        /// Which marker check failed
        message: String,
    },

    /// Dictionary body is not well-formed XML
    #[error("Invalid dictionary response: {0}")]
    XmlError(#[from] xmltree::ParseError),

    /// A `tr` entry without its `text` child
    #[error("Dictionary entry #{index} has no <text> element")]
    MissingTextElement {
        /// Zero-based position of the entry in document order
        index: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// Background lookup task did not complete
    #[error("Task error: {message}")]
    TaskError {
        /// Join error reported by the runtime
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl YandexError {
    /// True for failures of the HTTP round trip itself
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            YandexError::ApiError { .. }
                | YandexError::NetworkError { .. }
                | YandexError::TimeoutError
                | YandexError::HttpError(_)
        )
    }

    /// True for failures decoding a response that did arrive
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            YandexError::TranslationParseError { .. }
                | YandexError::XmlError(_)
                | YandexError::MissingTextElement { .. }
        )
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, YandexError>;
