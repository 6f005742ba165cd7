//! Session persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rest of the account app reads the session from the fixed
//! `wpshopify-account-auth-token` key; the login flow is its only writer.
//! `MemoryStore` stands in for the browser outside `hydrate` builds.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::net::types::SessionToken;

/// Storage key holding the serialized `SessionToken`.
pub const AUTH_TOKEN_KEY: &str = "wpshopify-account-auth-token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
    #[error("session could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key/value store the session is written to.
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the store is missing or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Serialize `session` and write it under `AUTH_TOKEN_KEY`.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn save_session(store: &dyn SessionStore, session: &SessionToken) -> Result<(), StorageError> {
    let raw = serde_json::to_string(session)?;
    store.set_item(AUTH_TOKEN_KEY, &raw)
}

/// Window `localStorage`. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::WriteRejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
