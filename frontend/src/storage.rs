//! Local persistent storage for user preferences.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// String key/value store for preferences such as the UI language.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, storing values as plain strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match Self::storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("cannot read '{}': {}", key, e);
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("cannot read '{}': {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-memory store for hosts without `localStorage`.
///
/// Clones share the same map. Every successful `set` is appended to a
/// write log, which tests use to count persistence calls.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip_shares_state() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        assert_eq!(storage.get("lang"), None);

        storage.set("lang", "uk").unwrap();
        assert_eq!(handle.get("lang").as_deref(), Some("uk"));
        assert_eq!(handle.writes(), vec![("lang".to_string(), "uk".to_string())]);
    }

    #[test]
    fn test_memory_storage_prepopulated_value_is_not_a_write() {
        let storage = MemoryStorage::with_value("lang", "de");
        assert_eq!(storage.get("lang").as_deref(), Some("de"));
        assert!(storage.writes().is_empty());
    }

    #[test]
    fn test_storage_error_messages() {
        let err = StorageError::Write {
            key: "lang".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write 'lang': QuotaExceededError");
        assert_eq!(StorageError::Unavailable.to_string(), "local storage is unavailable");
    }
}
