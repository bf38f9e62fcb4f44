//! Persistent Key-Value Store
//!
//! Abstract get/set of named string values, plus JSON helpers that fall
//! back to a default (and log a warning) instead of failing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// Core trait for string key-value storage
///
/// Implementations: browser localStorage (frontend), [`MemoryStore`].
/// Access is synchronous and blocking.
pub trait KeyValueStore {
    /// Read a raw value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a raw value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

fn try_load<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> StoreResult<Option<T>> {
    match store.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode { key: key.to_string(), source }),
        None => Ok(None),
    }
}

/// Load a JSON value, or `default` when it is missing or unreadable
pub fn load_or<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, default: T) -> T {
    match try_load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            warn!("Failed to load {} from storage: {}", key, e);
            default
        }
    }
}

/// Save a JSON value; failures are logged and reported as `false`
pub fn save<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StoreError::Encode)
        .and_then(|raw| store.set_item(key, &raw));
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save {} to storage: {}", key, e);
            false
        }
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    /// Max total bytes of keys plus values, like a browser quota
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut items = self.items.borrow_mut();
        if let Some(quota) = self.quota {
            let used: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    message: format!("quota of {} bytes exceeded", quota),
                });
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage keys of the three persisted values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Serialized [`QuizData`](crate::QuizData)
    pub quiz_data: String,
    /// `"edit"` or `"preview"`
    pub mode: String,
    /// Current preview question index
    pub progress: String,
}

impl StorageKeys {
    pub const DEFAULT_NAMESPACE: &'static str = "quiz-builder";

    pub fn namespaced(namespace: &str) -> Self {
        Self {
            quiz_data: format!("{}-data", namespace),
            mode: format!("{}-mode", namespace),
            progress: format!("{}-progress", namespace),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::namespaced(Self::DEFAULT_NAMESPACE)
    }
}
