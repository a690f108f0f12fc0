use anyhow::Result;

use xwing_ledger::cli::{Cli, Command};
use xwing_ledger::{handle_inspect, handle_reconcile, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Command::Reconcile { store, inputs } => handle_reconcile(config, store.as_deref(), inputs),
        Command::Inspect { inputs } => handle_inspect(config, inputs),
    }
}
