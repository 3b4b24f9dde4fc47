//! Episode list response parser
//!
//! Decodes the JSON returned by `/shows/{id}/episodes`.

use crate::error::{Result, TvMazeError};
use crate::types::Episode;

/// Parse an episode list response body.
///
/// Fields other than id, name, season and number are ignored. Order and
/// values are kept exactly as the API returns them.
///
/// # Returns
/// * `Ok(Vec<Episode>)` with parsed episodes
/// * `Err(TvMazeError::MalformedResponse)` if the body is not an episode list
pub fn parse_episodes(body: &str) -> Result<Vec<Episode>> {
    serde_json::from_str(body)
        .map_err(|e| TvMazeError::MalformedResponse(format!("episode list: {}", e)))
}
