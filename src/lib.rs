pub mod cli;
pub mod config;
pub mod dedup;
pub mod domain;
pub mod errors;
pub mod format;
pub mod participants;
pub mod services;
pub mod sources;
pub mod standings;
pub mod store;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::services::ingestion::IngestionService;
use crate::services::reconciliation::ReconciliationService;
use crate::sources::{JsonFileSource, TournamentSource};
use crate::store::{JsonStore, MemoryStore};

const STORE_DIR_ENV: &str = "XWING_LEDGER_STORE";

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_reconcile(config_path: Option<&Path>, store_dir: Option<&Path>, inputs: &[PathBuf]) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let store_dir = resolve_store_dir(store_dir, &config);
    info!("Using store: {}", store_dir.display());

    let sources = open_sources(inputs)?;
    let store = JsonStore::new(&store_dir)?;
    let mut service = IngestionService::new(ReconciliationService::new(config), store)?;
    let report = service.run(&sources)?;

    info!(
        "  → {} inserted, {} merged, {} skipped",
        report.inserted, report.merged, report.skipped
    );
    Ok(())
}

pub fn handle_inspect(config_path: Option<&Path>, inputs: &[PathBuf]) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let sources = open_sources(inputs)?;

    let mut service = IngestionService::new(ReconciliationService::new(config), MemoryStore::new())?;
    service.run(&sources)?;

    let stored = service.into_store().into_vec();
    for entry in &stored {
        let unresolved = entry.tournament.unresolved_match_count();
        if unresolved > 0 {
            info!("'{}': {} matches left unresolved", entry.tournament.summary.name, unresolved);
        }
    }
    println!("{}", serde_json::to_string_pretty(&stored)?);
    Ok(())
}

fn open_sources(inputs: &[PathBuf]) -> Result<Vec<Box<dyn TournamentSource>>> {
    inputs
        .iter()
        .map(|path| Ok(Box::new(JsonFileSource::open(path)?) as Box<dyn TournamentSource>))
        .collect()
}

fn resolve_store_dir(cli_value: Option<&Path>, config: &AppConfig) -> PathBuf {
    cli_value
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(STORE_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| config.store.store_dir.clone())
}
