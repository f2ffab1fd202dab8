//! Read-only lookups.

use thiserror::Error;

use crate::api::ApiError;

/// A successful lookup and the banner describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<T> {
    /// What was fetched.
    pub data: T,

    /// User-visible confirmation.
    pub message: String,
}

impl<T> Lookup<T> {
    pub(crate) fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Why a lookup produced nothing.
///
/// The `Display` text is the user-visible message.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The search box was empty; no request was made.
    #[error("{0}")]
    Blank(&'static str),

    /// The search box held something unusable; no request was made.
    #[error("{0}")]
    Invalid(&'static str),

    /// The request failed.
    #[error("{message}")]
    Failed {
        /// User-visible text.
        message: &'static str,
        /// Underlying API failure.
        #[source]
        source: ApiError,
    },
}

impl LookupError {
    pub(crate) fn failed(message: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |source| Self::Failed { message, source }
    }
}
