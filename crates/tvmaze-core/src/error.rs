//! Error types for the TVMaze show finder
//!
//! TvMazeError implements Serialize so the UI layer can show it as a message.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for show search and episode listing operations
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// Transport failure or non-success HTTP status
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Empty search term while empty terms are rejected
    #[error("Search term cannot be empty")]
    EmptyTerm,

    /// Requested resource was not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Session store refused a write
    #[error("Session store error: {0}")]
    Store(String),

    /// Configuration could not be loaded or is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Serialize for TvMazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for show finder operations
pub type Result<T> = std::result::Result<T, TvMazeError>;
