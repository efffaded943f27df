use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unsupported {kind} value for field `{field}`: {value}")]
    UnsupportedType {
        field: &'static str,
        kind: &'static str,
        value: String,
    },
    #[error("invalid email address (expected local@domain): {0}")]
    InvalidEmail(String),
    #[error("invalid date (expected year,month,day): {0}")]
    InvalidDate(String),
    #[error("invalid number for field `{field}`: {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid cluster probability: {0}")]
    InvalidProbability(String),
    #[error("invalid cluster copy range: {min}..={max}")]
    InvalidCopyRange { min: u32, max: u32 },
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("invalid import path: {0:?}")]
    InvalidImportPath(String),
}
