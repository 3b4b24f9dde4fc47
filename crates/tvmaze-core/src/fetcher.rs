//! Main show finder API
//!
//! Combines the HTTP client, response parsers and the per-term show cache
//! into the two operations the UI needs: search shows by term and list the
//! episodes of a show.

use crate::cache::ShowCache;
use crate::client::TvMazeClient;
use crate::config::TvMazeConfig;
use crate::error::{Result, TvMazeError};
use crate::parser::{parse_episodes, parse_search_results};
use crate::store::SessionStore;
use crate::types::{Episode, ShowGroup, ShowId};

/// Show search and episode listing over a session store
///
/// The fetcher owns its store; dropping the fetcher ends the session.
///
/// # Example
/// ```no_run
/// use tvmaze_core::{MemorySessionStore, ShowFetcher};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let fetcher = ShowFetcher::new(MemorySessionStore::new())?;
///
///     let groups = fetcher.fetch_shows("batman").await?;
///     println!("Found {} shows", groups.iter().map(Vec::len).sum::<usize>());
///
///     Ok(())
/// }
/// ```
pub struct ShowFetcher<S> {
    client: TvMazeClient,
    cache: ShowCache<S>,
    reject_empty_terms: bool,
}

impl<S: SessionStore> ShowFetcher<S> {
    /// Create a fetcher with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(store: S) -> Result<Self> {
        Self::with_config(&TvMazeConfig::default(), store)
    }

    /// Create a fetcher with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn with_config(config: &TvMazeConfig, store: S) -> Result<Self> {
        let client = TvMazeClient::with_config(config)?;
        Ok(Self {
            client,
            cache: ShowCache::new(store),
            reject_empty_terms: config.reject_empty_terms,
        })
    }

    /// Create a fetcher around a pre-configured client.
    ///
    /// Empty search terms are forwarded to the API.
    pub fn with_client(client: TvMazeClient, store: S) -> Self {
        Self {
            client,
            cache: ShowCache::new(store),
            reject_empty_terms: false,
        }
    }

    /// The show cache backing `fetch_shows`
    pub fn cache(&self) -> &ShowCache<S> {
        &self.cache
    }

    /// Search shows by term, serving repeated terms from the cache.
    ///
    /// On a cache hit every group recorded for the term is returned and no
    /// request is made. On a miss the API is queried once, the normalized
    /// group is recorded, and a single-group list is returned.
    ///
    /// # Arguments
    /// * `term` - Search term, matched exactly; the empty string is forwarded
    ///   unless the fetcher was configured to reject it
    ///
    /// # Returns
    /// * `Ok(Vec<ShowGroup>)` with the result groups for the term
    /// * `Err(TvMazeError::EmptyTerm)` if the term is empty and rejected
    /// * `Err(TvMazeError::Network)` / `Err(TvMazeError::MalformedResponse)`
    ///   on a failed miss; the cache is left untouched
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::{MemorySessionStore, ShowFetcher};
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let fetcher = ShowFetcher::new(MemorySessionStore::new())?;
    /// for group in fetcher.fetch_shows("batman").await? {
    ///     for show in group {
    ///         println!("{} ({})", show.name, show.id);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_shows(&self, term: &str) -> Result<Vec<ShowGroup>> {
        if self.reject_empty_terms && term.is_empty() {
            return Err(TvMazeError::EmptyTerm);
        }

        if let Some(groups) = self.cache.lookup(term) {
            tracing::debug!(term, groups = groups.len(), "show cache hit");
            return Ok(groups);
        }

        tracing::debug!(term, "show cache miss");

        let path = format!("/search/shows/?q={}", urlencoding::encode(term));
        let body = self.client.fetch(&path).await?;
        let group = parse_search_results(&body)?;

        self.cache.record(term, group.clone())?;

        Ok(vec![group])
    }

    /// List every episode of a show, in API order.
    ///
    /// Always queries the API; episode lists are not cached.
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` with all episodes
    /// * `Err(TvMazeError::NotFound)` if the show does not exist
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::{MemorySessionStore, ShowFetcher};
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let fetcher = ShowFetcher::new(MemorySessionStore::new())?;
    /// for ep in fetcher.fetch_episodes(1).await? {
    ///     println!("{} (season {}, episode {})", ep.name, ep.season, ep.number);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>> {
        let path = format!("/shows/{}/episodes", show_id);
        let body = self.client.fetch(&path).await?;

        let episodes = parse_episodes(&body)?;
        tracing::debug!(show_id, episodes = episodes.len(), "episodes fetched");

        Ok(episodes)
    }
}
