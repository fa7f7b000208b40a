//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue so the session store and theme
//! preference share one code path. Non-browser builds report the storage as
//! unavailable.

use crate::session::StorageError;

/// Read the raw string stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] outside the browser or when the page
/// has no storage, and [`StorageError::Rejected`] when the browser throws.
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        storage.get_item(key).map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}

/// Store `value` under `key`, replacing any previous value.
///
/// # Errors
///
/// Same as [`get_item`]; a full quota surfaces as [`StorageError::Rejected`].
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        storage.set_item(key, value).map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}
