use thiserror::Error;

/// Errors raised while constructing the configuration surface (client
/// timeout, batch size, API base). These are fatal to the caller that
/// constructed them and are never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("timeout must be greater than 0 seconds")]
    InvalidTimeout,

    #[error("posts must be between {min} and {max}, got {actual}")]
    PostsOutOfRange {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors from the retrieval boundary. Transport and decode failures are
/// surfaced unchanged; there is no retry.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("amount must be between {min} and {max}, got {actual}")]
    AmountOutOfRange {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("no item exists with id {0}")]
    NotFound(i64),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors from validating and converting a raw item into a [`Story`].
/// Each variant carries the offending values so callers can branch on the
/// kind instead of matching on message text.
///
/// [`Story`]: crate::models::Story
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("item type was not as expected: expected {expected:?}, got {actual:?}")]
    ItemKindMismatch {
        expected: &'static str,
        actual: String,
    },

    #[error("value below minimum: must be at least {min}, got {actual}")]
    BelowMinimum { min: i64, actual: i64 },

    #[error("empty strings are not allowed")]
    EmptyString,

    #[error("max string length must be greater than 0")]
    InvalidMaxLength,

    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),
}
