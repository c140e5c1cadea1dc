//! Transport Errors
//!
//! Everything that can go wrong talking to the folder backend.

use thiserror::Error;

/// Failure of a remote folder call
///
/// Stored in op error signals, so it stays `Clone` and carries plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, timeout or aborted request
    #[error("request failed: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("backend responded with status {0}")]
    Status(u16),
    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP client could not be constructed
    #[error("http client error: {0}")]
    Client(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Client(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
