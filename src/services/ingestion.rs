use anyhow::Result;
use log::{info, warn};

use crate::domain::{IngestProgress, Platform, ReconciledTournament, TournamentSummary, platform_label};
use crate::services::reconciliation::ReconciliationService;
use crate::sources::{SourceTournament, TournamentSource};
use crate::store::{StoredId, TournamentStore};

/// What happened to each tournament of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionReport {
    pub inserted: usize,
    pub merged: usize,
    pub skipped: usize,
}

/// Feeds source tournaments through reconciliation and applies the dedup verdicts to a store
pub struct IngestionService<S: TournamentStore> {
    reconciler: ReconciliationService,
    store: S,
    // Parallel vectors: dedup verdicts index into `summaries`
    stored_ids: Vec<StoredId>,
    summaries: Vec<TournamentSummary>,
}

impl<S: TournamentStore> IngestionService<S> {
    pub fn new(reconciler: ReconciliationService, store: S) -> Result<Self> {
        let (stored_ids, summaries) = store
            .candidates()?
            .into_iter()
            .map(|stored| (stored.id, stored.tournament.summary))
            .unzip();

        Ok(Self {
            reconciler,
            store,
            stored_ids,
            summaries,
        })
    }

    pub fn run(&mut self, sources: &[Box<dyn TournamentSource>]) -> Result<IngestionReport> {
        info!("=== Starting Reconciliation ===\n");
        info!("  → {} tournaments already stored", self.summaries.len());

        let mut loaded = Vec::new();
        for source in sources {
            let tournaments = self.load_source(source.as_ref())?;
            loaded.push((source.platform(), tournaments));
        }

        let total = loaded.iter().map(|(_, t)| t.len()).sum();
        let mut progress = IngestProgress::new(total);

        for (platform, tournaments) in &loaded {
            for tournament in tournaments {
                self.ingest_one(*platform, tournament, &mut progress)?;
            }
        }

        info!("=== Reconciliation Complete ===");
        Ok(IngestionReport {
            inserted: progress.inserted(),
            merged: progress.merged(),
            skipped: progress.skipped(),
        })
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn load_source(&self, source: &dyn TournamentSource) -> Result<Vec<SourceTournament>> {
        info!("Loading tournaments from {}...", platform_label(source.platform()));
        source.load()
    }

    fn ingest_one(
        &mut self,
        platform: Platform,
        tournament: &SourceTournament,
        progress: &mut IngestProgress,
    ) -> Result<()> {
        if tournament.players.is_empty() && tournament.matches.is_empty() {
            warn!("Skipping '{}' ({}): no players or matches", tournament.name, tournament.source_id);
            progress.increment_skipped();
            return Ok(());
        }

        let reconciled = self.reconciler.reconcile(platform, tournament, &self.summaries);

        match &reconciled.duplicate {
            Some(verdict) => {
                let existing = self.stored_ids[verdict.candidate_index];
                self.merge(existing, &reconciled)?;
                progress.increment_merged();
            }
            None => {
                let id = self.store.insert(&reconciled)?;
                self.stored_ids.push(id);
                self.summaries.push(reconciled.summary.clone());
                progress.increment_inserted();
            }
        }

        Ok(())
    }

    fn merge(&mut self, existing: StoredId, reconciled: &ReconciledTournament) -> Result<()> {
        if let Some(verdict) = &reconciled.duplicate {
            info!(
                "'{}' ({}) is a duplicate of '{}' ({:?})",
                reconciled.summary.name,
                platform_label(reconciled.summary.platform),
                verdict.candidate_name,
                verdict.tier
            );
        }
        self.store.merge_into(existing, reconciled)
    }
}
