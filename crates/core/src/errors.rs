//! Core error types for the lifeplan application.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (from Diesel, reqwest, etc.) are converted to these types by the storage
//! and cloud-sync crates.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Backend-specific errors are wrapped in string form so this type stays
/// agnostic of the concrete storage or transport in use.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Remote backend error: {0}")]
    Remote(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Schema migrations failed to run.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

/// Validation errors surfaced to callers as rejected operations.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(String),

    /// Promoting a pipeline brand is rejected while a current brand exists.
    #[error("a current brand already exists; automate or clear it first")]
    CurrentBrandExists,

    #[error("record not found: {0}")]
    MissingRecord(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
