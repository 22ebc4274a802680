//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::vet::Vet;
use crate::repository::errors::RepositoryResult;
use crate::repository::{VetListQuery, VetReader, VetSearchQuery};

mock! {
    pub Repository {}

    impl VetReader for Repository {
        fn list_vets(&self, query: VetListQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
        fn search_vets(&self, query: VetSearchQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
    }
}
