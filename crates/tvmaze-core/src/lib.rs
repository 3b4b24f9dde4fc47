//! TVMaze Show Finder Core Library
//!
//! This crate searches the public TVMaze API for shows, caches search
//! results per term in a session-scoped store, and lists show episodes.
//!
//! # Features
//! - Search shows by term, with repeated terms served from the cache
//! - List all episodes of a show
//! - Pluggable session store (`SessionStore`), in-memory by default
//! - Layered configuration from defaults, TOML and `TVMAZE_*` variables

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use cache::{ShowCache, SHOWS_KEY};
pub use client::TvMazeClient;
pub use config::TvMazeConfig;
pub use error::{Result, TvMazeError};
pub use fetcher::ShowFetcher;
pub use parser::MISSING_IMAGE_URL;
pub use store::{MemorySessionStore, SessionStore};
pub use types::{CacheEntry, Episode, EpisodeId, Show, ShowGroup, ShowId};
