//! Custom error types for translation operations

use thiserror::Error;

/// Errors raised while talking to the generative API
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No API key was configured
    #[error("API key is not configured (set GOOGLE_API_KEY)")]
    MissingApiKey,

    /// API request failed
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Raw error body
        message: String,
    },

    /// Provider quota or rate limit exceeded
    #[error("Quota exceeded: {message}")]
    QuotaExceededError {
        /// Underlying cause
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying cause
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// Underlying cause
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl GenerationError {
    /// Classify a transport-level reqwest failure
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::TimeoutError
        } else {
            GenerationError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

/// Errors surfaced by the translation service
///
/// The messages are the ones returned to callers; the underlying
/// [`GenerationError`] is logged and dropped before reaching this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The term was empty
    #[error("번역할 용어를 입력해주세요.")]
    Validation,

    /// The external call failed for any reason
    #[error("번역 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.")]
    Failure,
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;
