//! Search form for finding veterinarians by name.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::SearchTerm;

/// Field that carries every search validation message.
pub const SEARCH_ERROR_FIELD: &str = "lastName";
/// Error code attached to search validation messages.
pub const SEARCH_ERROR_CODE: &str = "notFound";
pub const EMPTY_SEARCH_MESSAGE: &str = "Please enter a name to search";
pub const NO_MATCHES_MESSAGE: &str = "No vets found matching your criteria";

/// Name criteria bound from the `/vets/search-results` query string.
///
/// Serialized back into the form when it is re-displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetSearchForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl VetSearchForm {
    pub fn first_name_term(&self) -> Option<SearchTerm> {
        SearchTerm::parse(self.first_name.as_deref())
    }

    pub fn last_name_term(&self) -> Option<SearchTerm> {
        SearchTerm::parse(self.last_name.as_deref())
    }

    /// Both name fields are missing, empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.first_name_term().is_none() && self.last_name_term().is_none()
    }
}

/// Builds the single-field rejection used by the search form.
pub fn search_rejection(message: &'static str) -> ValidationErrors {
    let mut error = ValidationError::new(SEARCH_ERROR_CODE);
    error.message = Some(Cow::Borrowed(message));

    let mut errors = ValidationErrors::new();
    errors.add(SEARCH_ERROR_FIELD, error);
    errors
}
