use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod vets;

/// Failures a service cannot recover from locally.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
