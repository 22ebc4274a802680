//! Form definitions backing the veterinarian routes.

use std::collections::BTreeMap;

use validator::ValidationErrors;

pub mod vets;

/// Flattens field errors into `field -> messages` for templates.
///
/// Errors without a message fall back to their code.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
