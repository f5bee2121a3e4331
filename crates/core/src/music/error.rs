use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by the entity services.
///
/// Each variant maps to a distinct transport status, see
/// [`service_error_to_status_code`](super::service_error_to_status_code).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{entity_type} not found: {sort_key}")]
    NotFound {
        entity_type: &'static str,
        sort_key: String,
    },
    #[error("{entity_type} {field} is required")]
    ValidationFailed {
        entity_type: &'static str,
        field: &'static str,
    },
    #[error("{entity_type} already exists: {sort_key}")]
    DuplicateKey {
        entity_type: &'static str,
        sort_key: String,
    },
    #[error(transparent)]
    Backend(#[from] RepositoryError),
}
