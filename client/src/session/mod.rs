//! Persisted sign-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `record` defines the session value and its on-disk JSON layout; `store`
//! reads and writes that value through a key-value backend (browser
//! `localStorage` in hydrate builds, an in-memory map elsewhere).

pub mod record;
pub mod store;

pub use record::{Identity, Session};
pub use store::{BrowserStorage, KeyValueStore, MemoryStore, SessionError, SessionStore, StorageError};
