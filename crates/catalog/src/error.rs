use thiserror::Error;

use pharmacy_core::DomainError;

use crate::repository::RepositoryError;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a catalog use case.
///
/// Domain failures pass through unchanged in meaning; anything raised by a
/// storage adapter is logged and collapsed into `Persistence` with a generic
/// message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Wrap an adapter failure raised while performing `operation`.
    pub fn persistence(operation: &str, source: RepositoryError) -> Self {
        tracing::error!(operation, error = %source, "repository operation failed");
        Self::Persistence(format!("failed to {operation}"))
    }

    /// Whether the caller is at fault (4xx) rather than the system (5xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CatalogError::Persistence(_))
    }
}

impl From<DomainError> for CatalogError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => CatalogError::Validation(msg),
            DomainError::InvalidId(msg) => CatalogError::Validation(msg),
        }
    }
}
