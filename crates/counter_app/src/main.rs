mod cli;
mod config;
mod run;

use std::process;

use clap::Parser;
use engine_logging::{engine_info, LogDestination};

use crate::cli::Args;
use crate::config::{FileConfig, HarvestConfig};

fn main() {
    let args = Args::parse();

    let level = engine_logging::level_for_verbosity(args.verbosity());
    let destination = match &args.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(destination, level);

    if let Err(err) = try_main(&args) {
        eprintln!("{}", error_line(&err));
        process::exit(1);
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = HarvestConfig::resolve(args, file);

    let report = run::run(&config)?;
    engine_info!(
        "{} counter types from {} cards ({} faces)",
        report.counters.len(),
        report.cards,
        report.faces
    );
    Ok(())
}

/// Plain one-line report of a fatal error, with its context chain.
fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}
