use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::vet::Vet,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod vet;

/// Zero-based page request handed to the storage layer.
///
/// Callers speak in 1-based page numbers; [`PageRequest::for_page`] performs
/// the conversion so the offset arithmetic lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub index: usize,
    /// Number of rows per page.
    pub size: usize,
}

impl PageRequest {
    /// Builds a request for the 1-based `page`; page `0` is treated as page `1`.
    pub fn for_page(page: usize, size: usize) -> Self {
        Self {
            index: page.max(1) - 1,
            size,
        }
    }

    /// Rows to skip; saturates at `i64::MAX` so an unreachable page reads as empty.
    pub fn offset(&self) -> i64 {
        self.index
            .checked_mul(self.size)
            .and_then(|offset| i64::try_from(offset).ok())
            .unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

/// Parameters for listing every vet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VetListQuery {
    pub pagination: Option<PageRequest>,
}

/// Parameters for the name substring search.
///
/// A vet matches when its first name contains `first_name` OR its last name
/// contains `last_name`, ignoring case. A missing term contributes no
/// predicate; with both missing every vet matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VetSearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub pagination: Option<PageRequest>,
}

impl VetListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(PageRequest::for_page(page, per_page));
        self
    }
}

impl VetSearchQuery {
    /// Matches `term` against both the first and the last name.
    pub fn name(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            first_name: Some(term.clone()),
            last_name: Some(term),
            pagination: None,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, term: impl Into<String>) -> Self {
        self.first_name = Some(term.into());
        self
    }

    pub fn last_name(mut self, term: impl Into<String>) -> Self {
        self.last_name = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(PageRequest::for_page(page, per_page));
        self
    }
}

/// Read access to veterinarian records.
///
/// Both methods return the total number of matching vets alongside the
/// requested slice, ordered by id.
pub trait VetReader {
    fn list_vets(&self, query: VetListQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
    fn search_vets(&self, query: VetSearchQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
}

/// Diesel-backed repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
