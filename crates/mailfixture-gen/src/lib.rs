pub mod cluster;
pub mod error;
pub mod load;
pub mod render;
pub mod write;

pub use error::{GenError, Result};
pub use render::RenderOptions;

use mailfixture_core::rules::ClusterPolicy;
use mailfixture_core::{Entry, RawRecord, Recipient};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    pub recipient: Recipient,
    pub clustering: ClusterPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub generate: GenerateOptions,
    pub render: RenderOptions,
}

/// Entries in output order: every source record, then the clustered copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub entries: Vec<Entry>,
    pub source_records: usize,
    pub identities: usize,
    pub clustered_records: usize,
}

impl Generated {
    pub fn dropped_identities(&self) -> usize {
        self.identities - self.clustered_records
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input_files: Vec<String>,
    pub source_records: usize,
    pub clustered_records: usize,
    pub dropped_identities: usize,
    pub total_entries: usize,
    pub output: String,
}

/// OS-seeded unless a seed is given.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn generate<R: Rng + ?Sized>(
    records: &[RawRecord],
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Generated> {
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let entry = Entry::derive(record, &options.recipient)
            .map_err(|source| GenError::InvalidRecord { index, source })?;
        entries.push(entry);
    }

    let identities = cluster::select_identities(records, &options.clustering, rng)?;
    let clustered = cluster::clustered_records(records, &identities);
    for (index, record) in clustered.iter().enumerate() {
        let entry = Entry::derive(record, &options.recipient)
            .map_err(|source| GenError::InvalidClusteredRecord { index, source })?;
        entries.push(entry);
    }

    let generated = Generated {
        entries,
        source_records: records.len(),
        identities: identities.len(),
        clustered_records: clustered.len(),
    };
    if generated.dropped_identities() > 0 {
        warn!(
            dropped = generated.dropped_identities(),
            "more cluster identities than records; surplus dropped"
        );
    }
    debug!(
        source = generated.source_records,
        clustered = generated.clustered_records,
        "entries derived"
    );
    Ok(generated)
}

/// Runs the whole batch. The output file is only touched once every record
/// has been derived and rendered.
pub fn run<R: Rng + ?Sized>(options: &RunOptions, rng: &mut R) -> Result<Report> {
    let paths = load::discover(&options.input_dir)?;
    if paths.is_empty() {
        warn!(dir = %options.input_dir.display(), "no fixture files found");
    }
    let records = load::load_records(&paths)?;
    let generated = generate(&records, &options.generate, rng)?;
    let module = render::render_module(&generated.entries, &options.render);
    write::write_output(&options.output, &module)?;
    info!(
        path = %options.output.display(),
        entries = generated.entries.len(),
        "fixture module written"
    );

    Ok(Report {
        input_files: paths
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        source_records: generated.source_records,
        clustered_records: generated.clustered_records,
        dropped_identities: generated.dropped_identities(),
        total_entries: generated.entries.len(),
        output: options.output.display().to_string(),
    })
}
