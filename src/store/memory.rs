use anyhow::Result;

use super::{StoredId, StoredTournament, TournamentStore};
use crate::domain::ReconciledTournament;

/// Store kept entirely in memory, for dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: Vec<StoredTournament>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_vec(self) -> Vec<StoredTournament> {
        self.tournaments
    }

    fn find_mut(&mut self, id: StoredId) -> Result<&mut StoredTournament> {
        self.tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow::anyhow!("No stored tournament with id {}", id.0))
    }
}

impl TournamentStore for MemoryStore {
    fn candidates(&self) -> Result<Vec<StoredTournament>> {
        Ok(self.tournaments.clone())
    }

    fn insert(&mut self, tournament: &ReconciledTournament) -> Result<StoredId> {
        let id = StoredId(self.tournaments.len() as u64 + 1);
        self.tournaments.push(StoredTournament::new(id, tournament));
        Ok(id)
    }

    fn merge_into(&mut self, existing: StoredId, tournament: &ReconciledTournament) -> Result<()> {
        self.find_mut(existing)?.absorb(tournament);
        Ok(())
    }
}
