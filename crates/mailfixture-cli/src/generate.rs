use crate::error::not_found;
use anyhow::{Context as _, Result};
use mailfixture_config as config;
use mailfixture_gen::{rng_from_seed, GenerateOptions, RenderOptions, Report, RunOptions};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug)]
pub struct GenerateArgs {
    pub input_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn generate(args: GenerateArgs) -> Result<()> {
    let app_config = config::load(args.config).with_context(|| "load config")?;

    let options = RunOptions {
        input_dir: args.input_dir.unwrap_or(app_config.input_dir),
        output: args.out.unwrap_or(app_config.output),
        generate: GenerateOptions {
            recipient: app_config.recipient,
            clustering: app_config.clustering,
        },
        render: RenderOptions {
            entry_import: app_config.render.entry_import,
            const_name: app_config.render.const_name,
        },
    };
    if !options.input_dir.is_dir() {
        let dir = options.input_dir.display();
        return Err(not_found(format!("input directory {dir}")));
    }
    debug!(
        input_dir = %options.input_dir.display(),
        output = %options.output.display(),
        seed = ?args.seed,
        "generating fixtures"
    );

    let mut rng = rng_from_seed(args.seed);
    let report = mailfixture_gen::run(&options, &mut rng)
        .with_context(|| format!("generate fixtures from {}", options.input_dir.display()))?;

    if args.json {
        return print_json(&report);
    }
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &Report) {
    println!(
        "Wrote {} entries to {} (source {}, clustered {})",
        report.total_entries, report.output, report.source_records, report.clustered_records
    );
    if report.dropped_identities > 0 {
        println!(
            "Dropped {} cluster identities without a record to pair with",
            report.dropped_identities
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
