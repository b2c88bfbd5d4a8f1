//! Store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reaching or querying the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection, query, or constraint failure reported by the driver
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot serve requests (e.g. a poisoned in-memory lock)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message_is_passed_through() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn test_unavailable_message() {
        let err = StoreError::Unavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "store unavailable: lock poisoned");
    }
}
