use crate::server::error::AppError;

/// Trims a string field, treating blank values as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builds the 400 error naming every field flagged as missing.
///
/// # Arguments
/// - `fields` - `(field name, is missing)` pairs in the order they should be reported
pub fn missing_fields(fields: &[(&str, bool)]) -> AppError {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(name, _)| *name)
        .collect();

    AppError::BadRequest(format!("Missing required fields: {}", missing.join(", ")))
}
