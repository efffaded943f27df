mod error;
mod generate;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(
    name = "mailfixture",
    version,
    about = "Generate clustered fake mail entries as a Rust array"
)]
struct Cli {
    /// Directory scanned for *.json fixture files
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Generated Rust file (overwritten)
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible clustering
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input_dir,
        out,
        config,
        seed,
        json,
        verbose: _,
    } = cli;

    generate::generate(generate::GenerateArgs {
        input_dir,
        out,
        config,
        seed,
        json,
    })
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
