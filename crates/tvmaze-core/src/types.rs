//! Data types for the TVMaze show finder
//!
//! Normalized records handed to the presentation layer, plus the cache entry
//! layout persisted in the session store. All types are JSON-serializable.

use serde::{Deserialize, Serialize};

/// TVMaze show identifier
pub type ShowId = u32;

/// TVMaze episode identifier
pub type EpisodeId = u32;

/// Normalized show record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVMaze show id
    pub id: ShowId,
    /// Display name
    pub name: String,
    /// Summary text, may contain HTML markup (empty when the API has none)
    pub summary: String,
    /// Medium-size image URL, or the fallback URL when the show has no image
    pub image: String,
}

/// One search result list, in API order
pub type ShowGroup = Vec<Show>;

/// Normalized episode record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVMaze episode id
    pub id: EpisodeId,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}

/// Cached search results for a single term
///
/// The session store holds an ordered list of these under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Search term, matched exactly and case-sensitively
    pub term: String,
    /// Result groups recorded for the term
    pub data: Vec<ShowGroup>,
}

impl CacheEntry {
    /// Create an entry holding a single result group
    pub fn new(term: impl Into<String>, group: ShowGroup) -> Self {
        Self {
            term: term.into(),
            data: vec![group],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_show() -> Show {
        Show {
            id: 975,
            name: "Batman".to_string(),
            summary: "<p>Wealthy entrepreneur Bruce Wayne...</p>".to_string(),
            image: "https://static.tvmaze.com/uploads/images/medium_portrait/6/16463.jpg"
                .to_string(),
        }
    }

    #[test]
    fn test_show_serialization_field_names() {
        let json = serde_json::to_value(sample_show()).unwrap();
        assert_eq!(json["id"], 975);
        assert_eq!(json["name"], "Batman");
        assert!(json["summary"].as_str().unwrap().starts_with("<p>"));
        assert!(json["image"].as_str().unwrap().contains("medium_portrait"));
    }

    #[test]
    fn test_episode_serialization() {
        let episode = Episode {
            id: 1,
            name: "Pilot".to_string(),
            season: 1,
            number: 1,
        };

        let json = serde_json::to_string(&episode).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Pilot","season":1,"number":1}"#);
    }

    #[test]
    fn test_cache_entry_new_wraps_group() {
        let entry = CacheEntry::new("batman", vec![sample_show()]);
        assert_eq!(entry.term, "batman");
        assert_eq!(entry.data.len(), 1);
        assert_eq!(entry.data[0][0].id, 975);
    }

    #[test]
    fn test_cache_entry_layout() {
        let entry = CacheEntry::new("batman", Vec::new());
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"term":"batman","data":[[]]}"#);
    }
}
