//! Catalog error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors from catalog mutations. Searching never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("listing {0} already exists")]
    Duplicate(Uuid),

    #[error("listing {0} not found")]
    NotFound(Uuid),

    #[error("invalid listing: {0}")]
    Invalid(String),
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
