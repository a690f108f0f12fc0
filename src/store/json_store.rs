use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{StoredId, StoredTournament, TournamentStore};
use crate::domain::ReconciledTournament;
use crate::errors::store_context;

/// File-based store, one json document per tournament
pub struct JsonStore {
    tournaments_dir: PathBuf,
}

impl JsonStore {
    /// Create a new store instance
    pub fn new<P: AsRef<Path>>(store_dir: P) -> Result<Self> {
        let tournaments_dir = store_dir.as_ref().join("tournaments");

        fs::create_dir_all(&tournaments_dir).context("Failed to create store directory")?;

        Ok(Self { tournaments_dir })
    }

    pub fn load(&self, id: StoredId) -> Result<Option<StoredTournament>> {
        let file_path = self.build_path(id);
        self.read_json_opt(&file_path)
            .with_context(|| store_context("load", &id.0.to_string()))
    }

    // --- Helper Methods ---

    fn build_path(&self, id: StoredId) -> PathBuf {
        self.tournaments_dir.join(format!("{}.json", id.0))
    }

    fn stored_ids(&self) -> Result<Vec<StoredId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.tournaments_dir).context("Failed to list store directory")? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(id) = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(|stem| stem.parse().ok())
                {
                    ids.push(StoredId(id));
                }
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn next_id(&self) -> Result<StoredId> {
        let last = self.stored_ids()?.last().map(|id| id.0).unwrap_or(0);
        Ok(StoredId(last + 1))
    }

    fn save(&self, stored: &StoredTournament) -> Result<()> {
        let file_path = self.build_path(stored.id);
        self.write_json(&file_path, stored)
            .with_context(|| store_context("save", &stored.id.0.to_string()))?;
        info!("Saved tournament to store: {}", file_path.display());
        Ok(())
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write store file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()))?;
        Ok(Some(data))
    }
}

impl TournamentStore for JsonStore {
    fn candidates(&self) -> Result<Vec<StoredTournament>> {
        let mut stored = Vec::new();
        for id in self.stored_ids()? {
            if let Some(tournament) = self.load(id)? {
                stored.push(tournament);
            }
        }
        Ok(stored)
    }

    fn insert(&mut self, tournament: &ReconciledTournament) -> Result<StoredId> {
        let id = self.next_id()?;
        self.save(&StoredTournament::new(id, tournament))?;
        Ok(id)
    }

    fn merge_into(&mut self, existing: StoredId, tournament: &ReconciledTournament) -> Result<()> {
        let mut stored = self
            .load(existing)?
            .ok_or_else(|| anyhow::anyhow!("No stored tournament with id {}", existing.0))?;

        stored.absorb(tournament);
        self.save(&stored)
    }
}
