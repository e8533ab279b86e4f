//! Nearest-candidate search with zone expansion.

pub mod nearest;
pub mod search;
pub mod types;

pub use nearest::{find_nearest_in_zone, find_nearest_where, rank_by_distance, rank_where};
pub use search::ProximitySearch;
pub use types::{Candidate, Nearest, SearchOutcome, SearchResult};
