//! Per-term show search cache
//!
//! The collection of [`CacheEntry`] values is kept as one JSON list under
//! [`SHOWS_KEY`] in a [`SessionStore`]. Lookups scan the list for entries whose
//! term matches exactly; writes are a single read-modify-write of the list.

use crate::error::{Result, TvMazeError};
use crate::store::SessionStore;
use crate::types::{CacheEntry, ShowGroup};

/// Store key holding the serialized cache collection
pub const SHOWS_KEY: &str = "shows";

/// Show search cache over a session store
#[derive(Debug)]
pub struct ShowCache<S> {
    store: S,
}

impl<S: SessionStore> ShowCache<S> {
    /// Wrap a session store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the whole cache collection.
    ///
    /// An absent key reads as an empty collection. A value that does not
    /// parse is logged and also read as empty; the next `record` replaces it.
    pub fn entries(&self) -> Vec<CacheEntry> {
        let Some(raw) = self.store.get(SHOWS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable show cache");
                Vec::new()
            }
        }
    }

    /// Collect every result group cached for `term`.
    ///
    /// Returns `None` when no matching entry holds any group.
    pub fn lookup(&self, term: &str) -> Option<Vec<ShowGroup>> {
        let groups: Vec<ShowGroup> = self
            .entries()
            .into_iter()
            .filter(|entry| entry.term == term)
            .flat_map(|entry| entry.data)
            .collect();

        if groups.is_empty() {
            None
        } else {
            Some(groups)
        }
    }

    /// Record a freshly fetched group for `term` and persist the collection.
    ///
    /// Existing entries for the same term are replaced, so the collection
    /// holds at most one entry per term written through this cache.
    ///
    /// # Errors
    /// Returns `TvMazeError::Store` if the collection cannot be serialized
    /// or the store refuses the write.
    pub fn record(&self, term: &str, group: ShowGroup) -> Result<()> {
        let mut entries = self.entries();
        entries.retain(|entry| entry.term != term);
        entries.push(CacheEntry::new(term, group));

        self.persist(&entries)?;
        tracing::debug!(term, entries = entries.len(), "show cache updated");

        Ok(())
    }

    /// Terms with cached results, in insertion order
    pub fn terms(&self) -> Vec<String> {
        self.entries().into_iter().map(|entry| entry.term).collect()
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.store.remove(SHOWS_KEY);
    }

    fn persist(&self, entries: &[CacheEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)
            .map_err(|e| TvMazeError::Store(format!("cannot serialize show cache: {}", e)))?;
        self.store.set(SHOWS_KEY, raw)
    }
}
