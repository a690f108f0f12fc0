pub mod service;
pub mod similarity;

pub use service::{DuplicateMatch, MatchTier, find_duplicate};
pub use similarity::{name_similarity, roster_overlap};
