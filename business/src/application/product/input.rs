use crate::domain::product::errors::ProductError;

/// Trimmed text for a field the caller must supply.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ProductError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ProductError::MissingField(field)),
    }
}

/// Trimmed text for a field an update may omit, but not blank out.
pub(crate) fn non_blank_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ProductError> {
    value.map(|text| required_text(field, Some(text))).transpose()
}
