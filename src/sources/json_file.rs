use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use super::TournamentSource;
use super::models::{SourceBatch, SourceTournament};
use crate::domain::Platform;
use crate::errors::{load_context, parse_context};

/// Tournament source backed by a scraper's json export
pub struct JsonFileSource {
    path: PathBuf,
    batch: SourceBatch,
}

impl JsonFileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).with_context(|| load_context(&path))?;
        let batch = serde_json::from_str(&json).with_context(|| parse_context("source batch", &path))?;

        Ok(Self { path, batch })
    }
}

impl TournamentSource for JsonFileSource {
    fn platform(&self) -> Platform {
        self.batch.platform
    }

    fn load(&self) -> Result<Vec<SourceTournament>> {
        let mut tournaments = Vec::with_capacity(self.batch.tournaments.len());

        for (idx, value) in self.batch.tournaments.iter().enumerate() {
            match serde_json::from_value::<SourceTournament>(value.clone()) {
                Ok(tournament) => tournaments.push(tournament),
                Err(e) => warn!(
                    "Skipping malformed tournament #{} in {}: {}",
                    idx + 1,
                    self.path.display(),
                    e
                ),
            }
        }

        info!(
            "Loaded {} tournaments from {}",
            tournaments.len(),
            self.path.display()
        );
        Ok(tournaments)
    }
}
