//! Pure mapping from service errors to HTTP status codes.

use crate::storage::repository_error_to_status_code;

use super::ServiceError;

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `ValidationFailed` -> 400
/// - `DuplicateKey` -> 400
/// - `Backend` -> [`repository_error_to_status_code`]
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::NotFound { .. } => 404,
        ServiceError::ValidationFailed { .. } => 400,
        ServiceError::DuplicateKey { .. } => 400,
        ServiceError::Backend(err) => repository_error_to_status_code(err),
    }
}
