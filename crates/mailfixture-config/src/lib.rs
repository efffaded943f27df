use std::fs;
use std::path::{Path, PathBuf};

use mailfixture_core::rules::{
    validate_identifier, validate_import_path, ClusterPolicy, DEFAULT_CONST_NAME,
    DEFAULT_ENTRY_IMPORT,
};
use mailfixture_core::{CoreError, Recipient};
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILENAME: &str = "mailfixture.toml";

pub const DEFAULT_INPUT_DIR: &str = ".";
pub const DEFAULT_OUTPUT: &str = "../src/generated.rs";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub recipient: Recipient,
    pub clustering: ClusterPolicy,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub entry_import: String,
    pub const_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            recipient: Recipient::default(),
            clustering: ClusterPolicy::default(),
            render: RenderConfig {
                entry_import: DEFAULT_ENTRY_IMPORT.to_string(),
                const_name: DEFAULT_CONST_NAME.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {field} path: must not be empty")]
    EmptyPath { field: &'static str },
    #[error("invalid clustering.probability value: {0}")]
    InvalidProbability(f64),
    #[error("invalid clustering copy range: min_copies {min} exceeds max_copies {max}")]
    InvalidCopyRange { min: u32, max: u32 },
    #[error("invalid render.const_name value: {0:?}")]
    InvalidConstName(String),
    #[error("invalid render.entry_import value: {0:?}")]
    InvalidEntryImport(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    recipient: Option<RecipientFile>,
    clustering: Option<ClusteringFile>,
    render: Option<RenderFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipientFile {
    address: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClusteringFile {
    probability: Option<f64>,
    min_copies: Option<u32>,
    max_copies: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderFile {
    entry_import: Option<String>,
    const_name: Option<String>,
}

/// Loads the config file. An explicit path must exist; otherwise
/// `mailfixture.toml` in the working directory is used when present and
/// defaults apply when it is not.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = resolve_config_path(config_path)?;
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => Ok(PathBuf::from(CONFIG_FILENAME)),
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(input_dir) = parsed.input_dir {
        config.input_dir = non_empty_path("input_dir", input_dir)?;
    }
    if let Some(output) = parsed.output {
        config.output = non_empty_path("output", output)?;
    }

    if let Some(recipient) = parsed.recipient {
        if let Some(address) = recipient.address {
            config.recipient.address = address;
        }
        if let Some(name) = recipient.name {
            config.recipient.name = name;
        }
    }

    if let Some(clustering) = parsed.clustering {
        let defaults = config.clustering;
        let policy = ClusterPolicy {
            probability: clustering.probability.unwrap_or(defaults.probability),
            min_copies: clustering.min_copies.unwrap_or(defaults.min_copies),
            max_copies: clustering.max_copies.unwrap_or(defaults.max_copies),
        };
        policy.validate().map_err(|err| match err {
            CoreError::InvalidCopyRange { min, max } => ConfigError::InvalidCopyRange { min, max },
            _ => ConfigError::InvalidProbability(policy.probability),
        })?;
        config.clustering = policy;
    }

    if let Some(render) = parsed.render {
        if let Some(entry_import) = render.entry_import {
            validate_import_path(&entry_import)
                .map_err(|_| ConfigError::InvalidEntryImport(entry_import.clone()))?;
            config.render.entry_import = entry_import;
        }
        if let Some(const_name) = render.const_name {
            validate_identifier(&const_name)
                .map_err(|_| ConfigError::InvalidConstName(const_name.clone()))?;
            config.render.const_name = const_name;
        }
    }

    Ok(config)
}

fn non_empty_path(field: &'static str, path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { field });
    }
    Ok(path)
}
