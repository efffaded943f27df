use mailfixture_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read input directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read fixture file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture file {path}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid record {index}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("invalid clustered record {index}")]
    InvalidClusteredRecord {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("invalid cluster policy")]
    Policy(#[source] CoreError),
    #[error("failed to write output file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
