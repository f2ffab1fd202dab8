//! Session persistence.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use mockall::automock;
use thiserror::Error;
use tracing::debug;

use crate::session::Session;

/// Errors raised while loading or saving a session.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The session file could not be read, written or removed.
    #[error("session file {path} is not accessible")]
    Io {
        /// Session file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The session file does not hold a session.
    #[error("session file {path} is corrupt")]
    Corrupt {
        /// Session file.
        path: PathBuf,

        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The session could not be encoded.
    #[error("failed to encode session")]
    Encode(#[source] serde_json::Error),
}

/// Where the session is kept between runs.
#[automock]
pub trait SessionStore: Send + Sync {
    /// Last saved session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when a saved session exists but cannot be read.
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Saves `session`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Forgets the saved session.
    ///
    /// # Errors
    ///
    /// Returns an error when the saved session cannot be removed.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `inventrak/session.json` under the user data directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inventrak")
            .join("session.json")
    }

    /// Session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self) -> impl FnOnce(io::Error) -> SessionStoreError + '_ {
        |source| SessionStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error()(error)),
        };

        let session = serde_json::from_str(&contents).map_err(|source| {
            SessionStoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(path = %self.path.display(), "session loaded");

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(self.io_error())?;
        }

        let contents = serde_json::to_string_pretty(session).map_err(SessionStoreError::Encode)?;

        fs::write(&self.path, contents).map_err(self.io_error())?;

        debug!(path = %self.path.display(), "session saved");

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(self.io_error()(error)),
        }
    }
}

/// Store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;

        Ok(())
    }
}
