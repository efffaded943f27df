use anyhow::Error;
use mailfixture_config::ConfigError;
use mailfixture_core::CoreError;
use mailfixture_gen::GenError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:?}", err);
    } else {
        eprintln!("error: {:#}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            };
        }
        if let Some(gen_err) = cause.downcast_ref::<GenError>() {
            return gen_exit_code(gen_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn gen_exit_code(err: &GenError) -> u8 {
    match err {
        GenError::ReadDir { .. } | GenError::ReadFile { .. } | GenError::Write { .. } => {
            EXIT_FAILURE
        }
        GenError::ParseFile { .. }
        | GenError::InvalidRecord { .. }
        | GenError::InvalidClusteredRecord { .. }
        | GenError::Policy(_) => EXIT_INVALID_INPUT,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingConfigFile(_) => EXIT_NOT_FOUND,
        ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::EmptyPath { .. }
        | ConfigError::InvalidProbability(_)
        | ConfigError::InvalidCopyRange { .. }
        | ConfigError::InvalidConstName(_)
        | ConfigError::InvalidEntryImport(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;
    use std::path::PathBuf;

    #[test]
    fn record_errors_map_to_invalid_input() {
        let err: Error = GenError::InvalidRecord {
            index: 0,
            source: CoreError::InvalidEmail("x".to_string()),
        }
        .into();
        let err = Err::<(), _>(err).context("generate fixtures").unwrap_err();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn write_errors_map_to_failure() {
        let err: Error = GenError::Write {
            path: PathBuf::from("out.rs"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        }
        .into();
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }

    #[test]
    fn missing_config_maps_to_not_found() {
        let err: Error = ConfigError::MissingConfigFile(PathBuf::from("x.toml")).into();
        assert_eq!(exit_status(&err), EXIT_NOT_FOUND);
        assert_eq!(exit_status(&not_found("dir")), EXIT_NOT_FOUND);
    }

    #[test]
    fn unknown_errors_map_to_failure() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }
}
