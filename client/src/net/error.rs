//! Error type shared by the REST and websocket helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single remote call.
///
/// Call sites only log or alert these; nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}
