//! Error types for the shortener library.
//!
//! [`ShortenError`] carries the precise failure reason for logging; [`ErrorKind`] is the
//! coarse three-way classification callers use to pick a user-facing message.

use thiserror::Error;

/// Why a shortening attempt produced no short URL.
#[derive(Error, Debug)]
pub enum ShortenError {
    /// Input failed validation after normalization; no request was made.
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    /// Service answered with any status other than 200 OK.
    #[error("Shortening service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Shortening request timed out")]
    Timeout,

    /// Connection refused, DNS failure, reset, body read failure, etc.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// 200 OK but the trimmed body is not itself a valid URL.
    #[error("Unexpected response body: {0:?}")]
    UnexpectedResponse(String),
}

/// Coarse failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    RemoteFailure,
    UnexpectedResponse,
}

impl ShortenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortenError::InvalidInput(_) => ErrorKind::InvalidInput,
            ShortenError::Status(_) | ShortenError::Timeout | ShortenError::Transport(_) => {
                ErrorKind::RemoteFailure
            }
            ShortenError::UnexpectedResponse(_) => ErrorKind::UnexpectedResponse,
        }
    }
}

impl From<reqwest::Error> for ShortenError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ShortenError::Timeout
        } else {
            ShortenError::Transport(e)
        }
    }
}

/// Errors loading the shortener configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
}
