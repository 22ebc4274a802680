//! View models for the veterinarian pages.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::domain::vet::Vet;
use crate::forms::vets::VetSearchForm;
use crate::pagination::Paginated;

/// One page of vets with its pagination metadata.
pub type VetPage = Paginated<Vet>;

/// Query parameters accepted by the `/vets.html` page.
#[derive(Debug, Default, Deserialize)]
pub struct VetListQueryParams {
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    /// Optional search string entered by the user.
    pub search: Option<String>,
}

/// Query parameters accepted by `/vets/search-results` besides the form fields.
#[derive(Debug, Default, Deserialize)]
pub struct VetSearchPageParams {
    pub page: Option<usize>,
}

/// Path of the paginated vet table.
pub const VET_LIST_PATH: &str = "/vets.html";
/// Path answering the find-vets form.
pub const SEARCH_RESULTS_PATH: &str = "/vets/search-results";

/// Query parameter repeated on every pagination link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageParam {
    pub name: &'static str,
    pub value: String,
}

/// Target of the pagination links: `path?name=value&...&page=N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub path: &'static str,
    pub params: Vec<PageParam>,
}

impl PageLinks {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Adds `name=value` when `value` is present.
    pub fn with_param(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.params.push(PageParam {
                name,
                value: value.to_string(),
            });
        }
        self
    }
}

/// Data required to render the vet list template.
#[derive(Debug)]
pub struct VetListPageData {
    /// Paginated vets to show in the table.
    pub vets: VetPage,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Where the page links point, carrying the criteria that produced `vets`.
    pub page_links: PageLinks,
}

/// Data required to render the find-vets form.
#[derive(Debug)]
pub struct FindVetsPageData {
    /// Criteria to pre-fill the inputs with.
    pub vet: VetSearchForm,
    pub errors: ValidationErrors,
}

impl FindVetsPageData {
    pub fn blank() -> Self {
        Self {
            vet: VetSearchForm::default(),
            errors: ValidationErrors::new(),
        }
    }
}

/// Result of submitting the find-vets form.
#[derive(Debug)]
pub enum VetSearchOutcome {
    /// Neither name was given; the form is shown again with an error.
    EmptyCriteria(FindVetsPageData),
    /// The criteria matched nobody; the form is shown again with an error.
    NoMatches(FindVetsPageData),
    /// At least one vet matched.
    Found(VetListPageData),
}
