use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API error: {code} - {message}")]
    ApiError { code: i64, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    /// An array element carries fewer fields than its record shape requires.
    /// Raised by the response decoders; the whole decode is discarded.
    #[error("invalid {record} response: element {index} has {found} fields, expected at least {expected}")]
    InvalidResponseShape {
        record: &'static str,
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("JSON type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ExchangeError {
    /// True for failures raised by the transport rather than by decoding.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::NetworkError(_) | Self::ApiError { .. }
        )
    }
}
