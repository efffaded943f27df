pub mod clustering;
pub mod naming;

pub use clustering::{ClusterPolicy, DEFAULT_MAX_COPIES, DEFAULT_MIN_COPIES, DEFAULT_PROBABILITY};
pub use naming::{
    validate_identifier, validate_import_path, DEFAULT_CONST_NAME, DEFAULT_ENTRY_IMPORT,
};
