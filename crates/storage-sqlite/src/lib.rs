//! SQLite storage implementation for lifeplan.
//!
//! This crate provides all database-related functionality using Diesel with
//! SQLite. It implements the repository traits defined in `lifeplan-core`
//! and contains:
//! - Database connection pooling and the single-writer actor
//! - Diesel migrations
//! - The local key-value store backing the sync snapshot
//! - Table-backed repositories for the collections backend (server side)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; everything else works with the core traits.

pub mod db;
pub mod errors;
pub mod schema;

// Local key-value store + server-side snapshot document
pub mod state;

// Table-backed repository implementations (collections backend)
pub mod tables;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from lifeplan-core for convenience
pub use lifeplan_core::errors::{DatabaseError, Error, Result};
