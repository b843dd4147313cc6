//! Centralized error handling.
//!
//! Provides a unified error type for the data-access layer. Store failures
//! are propagated unchanged to the caller; no operation retries or recovers
//! locally.

use thiserror::Error;

/// Data-access error types
#[derive(Error, Debug)]
pub enum DataError {
    /// The repository's backing-store binding cannot be resolved.
    ///
    /// Fatal until the deployment configuration is corrected; every
    /// operation on the repository reports it, before any store access.
    #[error("repository misconfigured: {0}")]
    Configuration(String),

    /// An identifier did not resolve to an existing row.
    #[error("{0} not found")]
    NotFound(String),

    /// Failure reported by SeaORM or the database driver.
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience constructors
impl DataError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        DataError::Configuration(msg.into())
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        DataError::NotFound(entity.into())
    }
}

/// Result type alias
pub type DataResult<T> = Result<T, DataError>;

/// Extension trait for Option -> DataError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> DataResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> DataResult<T> {
        self.ok_or_else(|| DataError::NotFound(entity.to_owned()))
    }
}
