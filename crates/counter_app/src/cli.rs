//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Collect the counter types used in card rules text into a types file.
#[derive(Parser, Debug, Clone)]
#[command(name = "counter-harvester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Directory the types file is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name of the types file
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Scan a saved search page or bulk card list instead of querying the API
    #[arg(long, value_name = "FILE")]
    pub cards: Option<PathBuf>,

    /// Card search query
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// RON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also print the sorted types to stdout
    #[arg(long)]
    pub print: bool,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write log output to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// 0 = quiet, 1 = normal, 2 = verbose, 3 = trace.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}
