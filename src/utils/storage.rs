// ============================================================================
// STORAGE - String key/value backends (localStorage + memoria)
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("failed to write key '{0}'")]
    Write(String),

    #[error("failed to remove key '{0}'")]
    Remove(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Minimal string key/value surface shared by the browser and test backends
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Remove(key.to_string()))
    }
}


#[cfg(test)]
pub use memory::MemoryStorage;

pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    store.set_item(key, &json)
}

/// Reads and decodes a JSON value; corrupt entries read as absent
pub fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let json = store.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Ignoring unreadable value under '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_state() {
        let store = MemoryStorage::new();
        let other = store.clone();
        store.set_item("isLoggedIn", "true").unwrap();
        assert_eq!(other.get_item("isLoggedIn").as_deref(), Some("true"));
        other.remove_item("isLoggedIn").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_json_reads_as_absent() {
        let store = MemoryStorage::new();
        store.set_item("bloodRequests", "{not json").unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "bloodRequests");
        assert!(loaded.is_none());
    }

    #[test]
    fn json_helpers_round_trip() {
        let store = MemoryStorage::new();
        save_json(&store, "numbers", &vec![3, 2, 1]).unwrap();
        assert_eq!(load_json::<_, Vec<u32>>(&store, "numbers"), Some(vec![3, 2, 1]));
    }
}
