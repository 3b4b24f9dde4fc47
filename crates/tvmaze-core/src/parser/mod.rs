//! JSON parsers for TVMaze API responses
//!
//! - `search`: show search results, with image normalization
//! - `episodes`: episode lists

pub mod episodes;
pub mod search;

pub use episodes::parse_episodes;
pub use search::{parse_search_results, resolve_image, MISSING_IMAGE_URL};
