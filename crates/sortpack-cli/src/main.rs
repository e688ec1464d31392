//!
//! Compile an item sorter configuration into a data pack.
//!
//! Usage: `sortpack <config> [--out-dir DIR] [--check] [--strict]`

use clap::Parser;
use std::process;
use tracing::{error, info};

use sortpack_cli::{Args, run};

fn main() {
    sortpack_cli::init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            info!(
                "{} items in {} groups, {} errors, {} warnings",
                summary.stats.total_items,
                summary.stats.total_groups,
                summary.errors,
                summary.warnings
            );
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
