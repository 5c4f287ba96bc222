//! Service-layer error types
//!
//! The catalog is read-only, so the service layer only distinguishes
//! missing documents from every other store failure.

use chartsvc_db::DbError;
use thiserror::Error;

/// Result type alias for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Service-layer error types
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Chart or file bundle not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Underlying store failure
    #[error("Store error: {0}")]
    Store(String),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        if err.is_not_found() {
            ServiceError::NotFound(err.to_string())
        } else {
            ServiceError::Store(err.to_string())
        }
    }
}
