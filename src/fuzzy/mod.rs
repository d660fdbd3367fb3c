//! Fuzzy matching for command palettes and filters.

pub mod highlight;
pub mod score;
pub mod search;

pub use highlight::{highlight_segments, Segment};
pub use score::{score, Score};
pub use search::{fuzzy_match, fuzzy_search, FuzzyMatch, FuzzyOptions};
