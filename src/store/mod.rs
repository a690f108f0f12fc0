//! Boundary with the persistence layer.
//!
//! The reconciliation core never writes; the ingestion service applies its verdicts
//! through this trait.

mod json_store;
mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{Platform, ReconciledTournament};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredId(pub u64);

/// A source record folded into a stored tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAlias {
    pub platform: Platform,
    pub source_id: String,
    pub name: String,
}

impl SourceAlias {
    pub fn of(tournament: &ReconciledTournament) -> Self {
        Self {
            platform: tournament.summary.platform,
            source_id: tournament.source_id.clone(),
            name: tournament.summary.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTournament {
    pub id: StoredId,
    pub tournament: ReconciledTournament,
    /// Every source record known to describe this event, the original one first
    pub aliases: Vec<SourceAlias>,
}

impl StoredTournament {
    pub fn new(id: StoredId, tournament: &ReconciledTournament) -> Self {
        Self {
            id,
            tournament: tournament.clone(),
            aliases: vec![SourceAlias::of(tournament)],
        }
    }

    /// Records a duplicate source record and adopts a format this copy was missing
    pub fn absorb(&mut self, duplicate: &ReconciledTournament) {
        let alias = SourceAlias::of(duplicate);
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        if self.tournament.format.is_unclassified() && !duplicate.format.is_unclassified() {
            self.tournament.format = duplicate.format;
        }
    }
}

pub trait TournamentStore {
    /// Stored tournaments to compare incoming records against, in insertion order
    fn candidates(&self) -> Result<Vec<StoredTournament>>;

    fn insert(&mut self, tournament: &ReconciledTournament) -> Result<StoredId>;

    fn merge_into(&mut self, existing: StoredId, tournament: &ReconciledTournament) -> Result<()>;
}
