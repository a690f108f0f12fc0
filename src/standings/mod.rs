pub mod calculator;
pub mod ranking;

pub use calculator::{MatchOutcome, compute, match_outcome};
pub use ranking::rank;
