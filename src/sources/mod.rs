//! Boundary with the per-platform scrapers.
//!
//! Scrapers own all page and API extraction; they hand over plain `SourceTournament`
//! records, here as json batch files.

mod json_file;
pub mod models;

pub use json_file::JsonFileSource;
pub use models::{SourceBatch, SourcePlayer, SourceTournament};

use anyhow::Result;

use crate::domain::Platform;

/// A results platform that can supply tournaments for reconciliation
pub trait TournamentSource {
    fn platform(&self) -> Platform;

    /// Loads every well-formed tournament; malformed records are skipped
    fn load(&self) -> Result<Vec<SourceTournament>>;
}
