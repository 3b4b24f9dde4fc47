//! Session-scoped key-value storage
//!
//! `SessionStore` models browser-style session storage: string keys, string
//! values, alive for as long as the owning object. The show fetcher takes its
//! store by value, so the store's lifetime is the cache's lifetime.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;

/// String key-value store backing the show cache.
///
/// Implementations use interior mutability; all methods take `&self`.
pub trait SessionStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `TvMazeError::Store` if the backend refuses the write.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// In-process session store.
///
/// # Example
/// ```
/// use tvmaze_core::{MemorySessionStore, SessionStore};
///
/// let store = MemorySessionStore::new();
/// assert!(store.get("shows").is_none());
/// store.set("shows", "[]".to_string()).unwrap();
/// assert_eq!(store.get("shows").as_deref(), Some("[]"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every write is a single map call, so a poisoned map is still consistent.
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.values().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values().remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());
        assert!(store.get("shows").is_none());
    }

    #[test]
    fn test_memory_store_set_replaces() {
        let store = MemorySessionStore::new();
        store.set("shows", "[]".to_string()).unwrap();
        store.set("shows", "[1]".to_string()).unwrap();
        assert_eq!(store.get("shows").as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove() {
        let store = MemorySessionStore::new();
        store.set("shows", "[]".to_string()).unwrap();
        store.remove("shows");
        store.remove("missing");
        assert!(store.is_empty());
    }

    #[test]
    fn test_shared_store_sees_writes() {
        let store = Arc::new(MemorySessionStore::new());
        let handle = Arc::clone(&store);

        handle.set("shows", "[]".to_string()).unwrap();
        assert_eq!(store.get("shows").as_deref(), Some("[]"));
    }
}
