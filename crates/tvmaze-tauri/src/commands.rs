//! Tauri commands for the TVMaze show finder
//!
//! Errors are returned as display strings so the frontend can show them.

use tauri::State;

use crate::FetcherState;
use tvmaze_core::{Episode, ShowGroup, ShowId};

/// Search shows by term.
///
/// Repeated terms are answered from the session cache.
///
/// # Arguments
/// * `term` - Search term from the search form, passed through unchanged
///
/// # Returns
/// * `Ok(Vec<ShowGroup>)` with the result groups for the term
/// * `Err(String)` with error message if the search fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, FetcherState>,
    term: String,
) -> Result<Vec<ShowGroup>, String> {
    state.search_shows(&term).await
}

/// Get all episodes of a show.
///
/// # Arguments
/// * `show_id` - TVMaze ID of the clicked show
///
/// # Returns
/// * `Ok(Vec<Episode>)` with all episodes
/// * `Err(String)` with error message if retrieval fails
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, FetcherState>,
    show_id: ShowId,
) -> Result<Vec<Episode>, String> {
    state.episodes(show_id).await
}

/// Terms currently cached in this session, oldest first.
#[tauri::command]
pub async fn cached_terms(state: State<'_, FetcherState>) -> Result<Vec<String>, String> {
    Ok(state.cached_terms().await)
}

/// Drop every cached search in this session.
#[tauri::command]
pub async fn clear_show_cache(state: State<'_, FetcherState>) -> Result<(), String> {
    state.clear_cache().await;
    Ok(())
}
