//! Helpers shared by route handlers.

use validator::ValidationErrors;

/// Flattens field validation errors into a single `"; "`-separated message.
///
/// Fields are visited in name order so the message is stable across runs.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .flat_map(|field| {
            field_errors[field]
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
