//! Listing and searching veterinarians.

use crate::domain::types::SearchTerm;
use crate::domain::vet::Vets;
use crate::dto::vets::{
    FindVetsPageData, PageLinks, SEARCH_RESULTS_PATH, VET_LIST_PATH, VetListPageData,
    VetListQueryParams, VetPage, VetSearchOutcome,
};
use crate::forms::vets::{
    EMPTY_SEARCH_MESSAGE, NO_MATCHES_MESSAGE, VetSearchForm, search_rejection,
};
use crate::repository::{VetListQuery, VetReader, VetSearchQuery};
use crate::services::ServiceResult;

/// Fixed number of vets per page.
pub const VETS_PER_PAGE: usize = 5;

/// Request handling for the vet list, the JSON export and the search form.
///
/// Holds only a borrowed repository, so one instance per request is cheap and
/// nothing is shared between requests.
pub struct VetListService<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R> VetListService<'a, R>
where
    R: VetReader + ?Sized,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Loads a page of vets, filtered by name when `search` is not blank.
    ///
    /// The search term is trimmed for matching but echoed back untouched.
    pub fn list_vets(&self, params: VetListQueryParams) -> ServiceResult<VetListPageData> {
        let page = params.page.unwrap_or(1);

        let vets = match SearchTerm::parse(params.search.as_deref()) {
            Some(term) => self.search_page(VetSearchQuery::name(term.into_inner()), page)?,
            None => self.list_page(page)?,
        };

        let search_query = params.search.filter(|s| !s.trim().is_empty());
        let page_links =
            PageLinks::new(VET_LIST_PATH).with_param("search", search_query.as_deref());

        Ok(VetListPageData {
            vets,
            search_query,
            page_links,
        })
    }

    /// Returns every vet, unpaginated, inside the [`Vets`] wrapper.
    pub fn list_all_vets(&self) -> ServiceResult<Vets> {
        let (_, vets) = self.repo.list_vets(VetListQuery::new()).map_err(|err| {
            log::error!("Failed to load vets: {err}");
            err
        })?;

        Ok(Vets::from(vets))
    }

    /// Blank criteria for the search form.
    pub fn init_search_form(&self) -> FindVetsPageData {
        FindVetsPageData::blank()
    }

    /// Runs the name search submitted from the search form.
    ///
    /// Blank criteria are rejected before the repository is queried.
    pub fn process_search_form(
        &self,
        form: VetSearchForm,
        page: Option<usize>,
    ) -> ServiceResult<VetSearchOutcome> {
        if form.is_blank() {
            return Ok(VetSearchOutcome::EmptyCriteria(FindVetsPageData {
                vet: form,
                errors: search_rejection(EMPTY_SEARCH_MESSAGE),
            }));
        }

        let first_name = form.first_name_term();
        let last_name = form.last_name_term();

        let page_links = PageLinks::new(SEARCH_RESULTS_PATH)
            .with_param("firstName", first_name.as_ref().map(SearchTerm::as_str))
            .with_param("lastName", last_name.as_ref().map(SearchTerm::as_str));

        let mut query = VetSearchQuery::new();
        if let Some(term) = first_name {
            query = query.first_name(term.into_inner());
        }
        if let Some(term) = last_name {
            query = query.last_name(term.into_inner());
        }

        let vets = self.search_page(query, page.unwrap_or(1))?;
        if vets.is_empty() {
            return Ok(VetSearchOutcome::NoMatches(FindVetsPageData {
                vet: form,
                errors: search_rejection(NO_MATCHES_MESSAGE),
            }));
        }

        Ok(VetSearchOutcome::Found(VetListPageData {
            vets,
            search_query: None,
            page_links,
        }))
    }

    fn list_page(&self, page: usize) -> ServiceResult<VetPage> {
        let (total, vets) = self
            .repo
            .list_vets(VetListQuery::new().paginate(page, VETS_PER_PAGE))
            .map_err(|err| {
                log::error!("Failed to list vets: {err}");
                err
            })?;

        Ok(VetPage::new(vets, page, VETS_PER_PAGE, total))
    }

    fn search_page(&self, query: VetSearchQuery, page: usize) -> ServiceResult<VetPage> {
        let (total, vets) = self
            .repo
            .search_vets(query.paginate(page, VETS_PER_PAGE))
            .map_err(|err| {
                log::error!("Failed to search vets: {err}");
                err
            })?;

        Ok(VetPage::new(vets, page, VETS_PER_PAGE, total))
    }
}
