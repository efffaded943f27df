use crate::error::CoreError;

pub const DEFAULT_ENTRY_IMPORT: &str = "super::database::Entry";
pub const DEFAULT_CONST_NAME: &str = "ENTRIES";

/// Accepts a plain Rust identifier such as `ENTRIES`.
pub fn validate_identifier(raw: &str) -> Result<&str, CoreError> {
    let mut chars = raw.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            raw != "_" && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
        }
        _ => false,
    };
    if valid {
        Ok(raw)
    } else {
        Err(CoreError::InvalidIdentifier(raw.to_string()))
    }
}

/// Accepts a `::`-separated path whose segments are identifiers, e.g.
/// `super::database::Entry`.
pub fn validate_import_path(raw: &str) -> Result<&str, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed != raw {
        return Err(CoreError::InvalidImportPath(raw.to_string()));
    }
    for segment in trimmed.split("::") {
        if validate_identifier(segment).is_err() {
            return Err(CoreError::InvalidImportPath(raw.to_string()));
        }
    }
    Ok(raw)
}
