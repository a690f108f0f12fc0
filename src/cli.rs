use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "X-Wing tournament results reconciler")]
pub struct Cli {
    /// JSON file overriding the default thresholds and format rules
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Reconcile scraper batches and insert or merge them into the store
    Reconcile {
        /// Store directory (defaults to $XWING_LEDGER_STORE, then the configured directory)
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Scraper batch files, processed in the given order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Reconcile batches without storing and print the result as JSON
    Inspect {
        /// Scraper batch files, processed in the given order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}
