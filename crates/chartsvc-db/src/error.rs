//! Store-specific error types and conversions.
//!
//! Callers only ever distinguish three outcomes: found, not found, and any
//! other store failure. The variants below exist so logs stay useful, not
//! so the engine can branch on them.

use thiserror::Error;

/// Result type alias for store operations
pub type DbResult<T> = Result<T, DbError>;

/// Store-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection-level error
    #[error("Store connection error: {0}")]
    Connection(String),

    /// Query error
    #[error("Query error: {0}")]
    Query(String),

    /// Document not found
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Document payload could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Pool configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal store error
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl DbError {
    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound(_))
    }
}

/// Convert SQLx errors to our error type
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound("no documents in result".to_string()),

            sqlx::Error::Database(db_err) => DbError::Query(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => {
                DbError::Connection("connection pool timeout".to_string())
            }

            sqlx::Error::PoolClosed => DbError::Connection("connection pool closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::Connection(format!("I/O error: {}", io_err)),

            sqlx::Error::Tls(tls_err) => DbError::Connection(format!("TLS error: {}", tls_err)),

            sqlx::Error::Protocol(msg) => DbError::Connection(format!("protocol error: {}", msg)),

            sqlx::Error::ColumnNotFound(col) => {
                DbError::Query(format!("column not found: {}", col))
            }

            sqlx::Error::Decode(msg) => DbError::Serialization(format!("decode error: {}", msg)),

            _ => DbError::Internal(format!("{}", err)),
        }
    }
}

/// Convert document decode errors
impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::Serialization(format!("{}", err))
    }
}
