//! Client-side session.
//!
//! The backend keeps no session state; whether the user is logged in is
//! remembered here and gates what the shell offers.

mod store;

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SessionStoreError};

#[cfg(test)]
pub use store::MockSessionStore;

/// Whether someone is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Session {
    /// Nobody is logged in.
    #[default]
    Anonymous,

    /// `username` logged in successfully.
    Authenticated {
        /// Name the user logged in with.
        username: String,
    },
}

impl Session {
    /// A logged-out session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Marks `username` as logged in.
    pub fn authenticate(&mut self, username: impl Into<String>) {
        *self = Self::Authenticated {
            username: username.into(),
        };
    }

    /// Logs out.
    pub fn invalidate(&mut self) {
        *self = Self::Anonymous;
    }

    /// Logged-in user name.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { username } => Some(username),
        }
    }

    /// Whether someone is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// The current [`Session`] and where it is kept.
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    /// Restores the last saved session.
    ///
    /// A missing or unreadable session starts logged out.
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        let session = match store.load() {
            Ok(session) => session.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable session");

                Session::anonymous()
            }
        };

        Self { session, store }
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Logged-in user name.
    pub fn username(&self) -> Option<&str> {
        self.session.username()
    }

    /// Whether someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Marks `username` as logged in and saves the session.
    ///
    /// # Errors
    ///
    /// Returns an error when the session could not be saved; the in-memory
    /// session is authenticated regardless.
    pub fn authenticate(&mut self, username: impl Into<String>) -> Result<(), SessionStoreError> {
        self.session.authenticate(username);

        info!(username = self.session.username(), "session authenticated");

        self.store.save(&self.session)
    }

    /// Logs out and forgets the saved session.
    ///
    /// # Errors
    ///
    /// Returns an error when the saved session could not be removed.
    pub fn invalidate(&mut self) -> Result<(), SessionStoreError> {
        self.session.invalidate();

        info!("session invalidated");

        self.store.clear()
    }
}

impl Debug for SessionContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SessionContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn session_serializes_with_a_state_tag() -> TestResult {
        let mut session = Session::anonymous();

        session.authenticate("alice");

        let json = serde_json::to_value(&session)?;

        assert_eq!(
            json,
            serde_json::json!({ "state": "authenticated", "username": "alice" })
        );

        Ok(())
    }

    #[test]
    fn restore_falls_back_to_anonymous_on_errors() {
        let mut store = MockSessionStore::new();

        store.expect_load().returning(|| {
            Err(SessionStoreError::Io {
                path: "session.json".into(),
                source: io::Error::other("disk on fire"),
            })
        });

        let context = SessionContext::restore(Arc::new(store));

        assert!(!context.is_authenticated());
    }

    #[test]
    fn authenticate_saves_and_invalidate_clears() -> TestResult {
        let mut store = MockSessionStore::new();

        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .withf(|session| session.username() == Some("alice"))
            .times(1)
            .returning(|_| Ok(()));
        store.expect_clear().times(1).returning(|| Ok(()));

        let mut context = SessionContext::restore(Arc::new(store));

        context.authenticate("alice")?;
        assert_eq!(context.username(), Some("alice"));

        context.invalidate()?;
        assert_eq!(context.session(), &Session::Anonymous);

        Ok(())
    }
}
