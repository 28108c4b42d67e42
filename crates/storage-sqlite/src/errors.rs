//! Conversion from Diesel errors into the core error types.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use lifeplan_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-layer error wrapper. Converted into the core [`Error`] at the
/// repository boundary so callers stay Diesel-agnostic.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Query failed: {0}")]
    Query(#[from] DieselError),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Migration failed: {0}")]
    Migration(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Query(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("record not found".to_string()))
            }
            StorageError::Query(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::Query(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Connection(msg) => {
                Error::Database(DatabaseError::ConnectionFailed(msg))
            }
            StorageError::Pool(msg) => Error::Database(DatabaseError::PoolCreationFailed(msg)),
            StorageError::Migration(msg) => Error::Database(DatabaseError::MigrationFailed(msg)),
        }
    }
}
