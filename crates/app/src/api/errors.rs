//! Remote API errors.

use thiserror::Error;

/// Errors raised by [`InventoryApi`](super::InventoryApi) calls.
///
/// Client errors (4xx), server errors (5xx) and transport failures are all
/// surfaced here; callers decide how much of the detail to show.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or (de)serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{path} failed with status {status}")]
    Status {
        /// Endpoint path that was called.
        path: &'static str,

        /// HTTP status code.
        status: u16,

        /// Raw response body, usually the backend's error text.
        body: String,
    },
}

impl ApiError {
    /// Response body returned alongside a non-2xx status, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => Some(body),
            Self::Status { .. } | Self::Http(_) => None,
        }
    }
}
