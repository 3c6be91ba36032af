use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result type returned by all repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the data layer. Anything raised inside a
/// `conn.transaction` scope aborts the transaction, so callers never observe
/// partial writes.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced entity does not exist (lookup miss or zero rows
    /// affected by an update/delete).
    #[error("entity not found")]
    NotFound,
    /// A uniqueness constraint was violated.
    #[error("conflicting entity already exists")]
    Conflict,
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(DieselError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => Self::Conflict,
            other => Self::Database(other),
        }
    }
}
