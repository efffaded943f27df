use crate::error::CoreError;

/// Splits `local@domain` into its two parts. Exactly one `@` is allowed.
pub fn split_email(value: &str) -> Result<(&str, &str), CoreError> {
    match value.split_once('@') {
        Some((local, domain)) if !domain.contains('@') => Ok((local, domain)),
        _ => Err(CoreError::InvalidEmail(value.to_string())),
    }
}
