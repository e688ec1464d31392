//! Command-line front end for building sorter data packs.

use std::path::PathBuf;

use clap::Parser;
use sortpack_core::compile;
use sortpack_data::{DirSink, MemorySink, PackError, PackSummary, load_config, write_pack};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "sortpack")]
#[command(about = "Compile an item sorter configuration into a data pack")]
pub struct Args {
    /// Config file (.json, .ron, .toml) or a directory containing sorter.*
    pub config: PathBuf,

    /// Directory the pack is written to
    #[arg(long = "out-dir", default_value = "build/sorter_pack")]
    pub out_dir: PathBuf,

    /// Compile and report without writing any files
    #[arg(long)]
    pub check: bool,

    /// Fail when the configuration has validation errors
    #[arg(long)]
    pub strict: bool,
}

/// Errors that end the run with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Pack(#[from] PackError),

    /// Validation errors were reported and `--strict` was given.
    #[error("{count} validation error(s) with --strict")]
    Strict { count: usize },
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sortpack_core=info,sortpack_data=info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Load, compile and (unless `--check`) write the pack.
///
/// With `--strict`, validation errors fail the run before anything is
/// written.
pub fn run(args: &Args) -> Result<PackSummary, CliError> {
    info!("Loading configuration from {}", args.config.display());
    let config = load_config(&args.config).map_err(PackError::from)?;
    let compilation = compile(&config);

    if args.strict && compilation.has_errors() {
        return Err(CliError::Strict {
            count: compilation.errors.len(),
        });
    }

    if args.check {
        let mut sink = MemorySink::new();
        let summary = write_pack(&compilation, &config.pack, &mut sink)?;
        info!("Check only: {} files would be written", sink.len());
        return Ok(summary);
    }

    let mut sink = DirSink::new(&args.out_dir);
    let summary = write_pack(&compilation, &config.pack, &mut sink)?;
    info!("Wrote data pack to {}", sink.root().display());
    Ok(summary)
}
