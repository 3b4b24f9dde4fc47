//! TVMaze Show Finder Tauri Integration
//!
//! This crate exposes the show finder to a Tauri 2.0 frontend. The managed
//! [`FetcherState`] owns the session store, so cached searches live exactly
//! as long as the application window.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_tauri::FetcherState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(FetcherState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::search_shows,
//!             tvmaze_tauri::commands::get_episodes,
//!             tvmaze_tauri::commands::cached_terms,
//!             tvmaze_tauri::commands::clear_show_cache,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `search_shows` - Search shows by term (cached per term)
//! - `get_episodes` - List episodes of a show
//! - `cached_terms` - Terms currently held in the session cache
//! - `clear_show_cache` - Drop all cached searches

pub mod commands;

use std::sync::Arc;
use tokio::sync::Mutex;

use tvmaze_core::{Episode, MemorySessionStore, ShowFetcher, ShowGroup, ShowId, TvMazeConfig};

/// Session fetcher type managed by Tauri
pub type SessionFetcher = ShowFetcher<MemorySessionStore>;

/// Thread-safe wrapper for the session's ShowFetcher.
///
/// The mutex serializes commands, so the cache's read-modify-write never
/// interleaves between two searches.
pub struct FetcherState {
    fetcher: Arc<Mutex<SessionFetcher>>,
}

impl FetcherState {
    /// Create a FetcherState from the layered `TVMAZE_*` configuration.
    ///
    /// # Errors
    /// Returns an error string if configuration loading or client creation fails.
    pub fn new() -> Result<Self, String> {
        let config = TvMazeConfig::load().map_err(|e| e.to_string())?;
        Self::with_config(&config)
    }

    /// Create a FetcherState with an explicit configuration.
    ///
    /// # Errors
    /// Returns an error string if the configuration is invalid.
    pub fn with_config(config: &TvMazeConfig) -> Result<Self, String> {
        let fetcher = ShowFetcher::with_config(config, MemorySessionStore::new())
            .map_err(|e| e.to_string())?;
        tracing::debug!(base_url = %config.base_url, "show finder session started");

        Ok(Self {
            fetcher: Arc::new(Mutex::new(fetcher)),
        })
    }

    /// Get a reference to the inner fetcher.
    pub fn fetcher(&self) -> &Arc<Mutex<SessionFetcher>> {
        &self.fetcher
    }

    /// Search shows by term, errors as display strings.
    pub async fn search_shows(&self, term: &str) -> Result<Vec<ShowGroup>, String> {
        let fetcher = self.fetcher.lock().await;
        fetcher.fetch_shows(term).await.map_err(|e| e.to_string())
    }

    /// List episodes of a show, errors as display strings.
    pub async fn episodes(&self, show_id: ShowId) -> Result<Vec<Episode>, String> {
        let fetcher = self.fetcher.lock().await;
        fetcher
            .fetch_episodes(show_id)
            .await
            .map_err(|e| e.to_string())
    }

    /// Terms cached in this session, oldest first.
    pub async fn cached_terms(&self) -> Vec<String> {
        self.fetcher.lock().await.cache().terms()
    }

    /// Drop every cached search in this session.
    pub async fn clear_cache(&self) {
        self.fetcher.lock().await.cache().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_with_default_config() {
        let state = FetcherState::with_config(&TvMazeConfig::default());
        assert!(state.is_ok());
    }

    #[test]
    fn test_state_invalid_config_message() {
        let config = TvMazeConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        match FetcherState::with_config(&config) {
            Err(msg) => assert!(msg.starts_with("Invalid configuration")),
            Ok(_) => panic!("Expected configuration error"),
        }
    }

    fn offline_state() -> FetcherState {
        // Nothing listens on the discard port, so any request fails fast.
        let config = TvMazeConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..Default::default()
        };
        FetcherState::with_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_state_starts_with_empty_cache() {
        let state = offline_state();
        assert!(state.cached_terms().await.is_empty());
    }

    #[tokio::test]
    async fn test_cached_terms_and_clear() {
        let state = offline_state();
        {
            let fetcher = state.fetcher().lock().await;
            fetcher.cache().record("batman", Vec::new()).unwrap();
            fetcher.cache().record("the office", Vec::new()).unwrap();
        }

        assert_eq!(state.cached_terms().await, vec!["batman", "the office"]);

        state.clear_cache().await;
        assert!(state.cached_terms().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_shows_served_from_cache() {
        let state = offline_state();
        state
            .fetcher()
            .lock()
            .await
            .cache()
            .record("batman", Vec::new())
            .unwrap();

        let groups = state.search_shows("batman").await.unwrap();
        assert_eq!(groups, vec![ShowGroup::new()]);
    }

    #[tokio::test]
    async fn test_search_shows_error_is_message() {
        let state = offline_state();
        match state.search_shows("batman").await {
            Err(msg) => assert!(msg.starts_with("Network request failed")),
            Ok(groups) => panic!("Expected network error, got {:?}", groups),
        }
    }

    #[tokio::test]
    async fn test_episodes_error_is_message() {
        let state = offline_state();
        match state.episodes(1).await {
            Err(msg) => assert!(msg.starts_with("Network request failed")),
            Ok(episodes) => panic!("Expected network error, got {:?}", episodes),
        }
    }
}
