//! Command errors.

use inventrak_app::{
    api::ApiError, domain::lookup::LookupError, forms::SubmitError, session::SessionStoreError,
};
use thiserror::Error;

use crate::render::RenderError;

/// Why a command did not complete.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The command needs a logged in session.
    #[error("not logged in")]
    NotLoggedIn,

    /// A list request failed.
    #[error("request failed: {0}")]
    Api(#[from] ApiError),

    /// A lookup produced nothing; the text is the user-visible message.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The form was not sent.
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// The form was sent and refused.
    #[error("{0}")]
    Rejected(String),

    /// The session could not be saved or cleared.
    #[error("failed to update session: {0}")]
    Session(#[from] SessionStoreError),

    /// Output could not be written.
    #[error(transparent)]
    Render(#[from] RenderError),
}
