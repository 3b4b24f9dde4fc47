//! Show search response parser
//!
//! Decodes the JSON returned by `/search/shows/` into normalized show records.

use serde::Deserialize;

use crate::error::{Result, TvMazeError};
use crate::types::{Show, ShowGroup, ShowId};

/// Image URL used when the API supplies no image for a show
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// One search hit as returned by the API
#[derive(Debug, Deserialize)]
struct SearchHit {
    show: ApiShow,
}

#[derive(Debug, Deserialize)]
struct ApiShow {
    id: ShowId,
    name: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    image: Option<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    #[serde(default)]
    medium: Option<String>,
}

/// Pick the image URL for a show record.
///
/// Returns the medium-size URL when present and non-empty, otherwise
/// [`MISSING_IMAGE_URL`].
///
/// # Examples
/// ```
/// use tvmaze_core::parser::{resolve_image, MISSING_IMAGE_URL};
///
/// assert_eq!(resolve_image(Some("https://img/medium.jpg")), "https://img/medium.jpg");
/// assert_eq!(resolve_image(None), MISSING_IMAGE_URL);
/// assert_eq!(resolve_image(Some("")), MISSING_IMAGE_URL);
/// ```
pub fn resolve_image(medium: Option<&str>) -> String {
    match medium {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => MISSING_IMAGE_URL.to_string(),
    }
}

/// Parse a show search response body.
///
/// # Arguments
/// * `body` - Raw JSON body of the search response
///
/// # Returns
/// * `Ok(ShowGroup)` with one normalized show per hit, in API order
/// * `Err(TvMazeError::MalformedResponse)` if the body is not a list of hits
pub fn parse_search_results(body: &str) -> Result<ShowGroup> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|e| TvMazeError::MalformedResponse(format!("search results: {}", e)))?;

    Ok(hits.into_iter().map(|hit| normalize_show(hit.show)).collect())
}

fn normalize_show(show: ApiShow) -> Show {
    let image = resolve_image(show.image.as_ref().and_then(|i| i.medium.as_deref()));

    Show {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    }
}
