//! Session persistence over a key-value slot.
//!
//! DESIGN
//! ======
//! `SessionStore` owns exactly one key. Writes always replace the whole
//! record. Reads never fail: a missing, empty, or corrupt record is the
//! logged-out session. `try_read` is the same decode with the corruption
//! surfaced for callers that need to tell the cases apart.
//!
//! The backend is a trait so the same store runs against browser
//! `localStorage` and against an in-memory map in native tests and SSR.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::consts::AUTH_STORAGE_KEY;
use crate::util::storage;

use super::record::Session;

/// Failure reported by a key-value backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// Failure reading or writing the session record.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("stored session is malformed")]
    Malformed(#[source] serde_json::Error),
    #[error("session could not be encoded")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A string-to-string persistent slot map.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Unavailable outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage::get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage::set_item(key, value)
    }
}

/// In-memory backend. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Reads and writes the session record under a single key.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: &'static str,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Store using the default `clientiq-auth` key.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, AUTH_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: &'static str) -> Self {
        Self { backend, key }
    }

    /// Decode the stored session. Nothing stored is `Ok(LoggedOut)`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] for an unparseable or inconsistent
    /// record and [`SessionError::Storage`] when the backend is unreachable.
    pub fn try_read(&self) -> Result<Session, SessionError> {
        let Some(raw) = self.backend.get_item(self.key)?.filter(|raw| !raw.is_empty()) else {
            return Ok(Session::LoggedOut);
        };
        serde_json::from_str(&raw).map_err(SessionError::Malformed)
    }

    /// The stored session, or `LoggedOut` when it cannot be read.
    pub fn read(&self) -> Session {
        match self.try_read() {
            Ok(session) => session,
            Err(SessionError::Storage(e)) => {
                log::debug!("session storage unreachable, treating as signed out: {e}");
                Session::LoggedOut
            }
            Err(e) => {
                log::warn!("discarding unreadable session record under {}: {e}", self.key);
                Session::LoggedOut
            }
        }
    }

    /// Replace the stored record with `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or the backend
    /// refuses the write.
    pub fn write(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(session).map_err(SessionError::Encode)?;
        self.backend.set_item(self.key, &raw)?;
        Ok(())
    }

    /// Overwrite the record with the logged-out value.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::write`].
    pub fn clear(&self) -> Result<(), SessionError> {
        self.write(&Session::LoggedOut)
    }
}
