//! Lifeplan Cloud Sync - opportunistic state synchronization.
//!
//! This crate keeps a session's local key-value state mirrored to the
//! server-side snapshot document and, when the richer collections backend
//! is enabled, implements the core repository traits over its REST API.
//!
//! The pieces:
//! - [`SessionContext`]: the explicit access-code session (no globals)
//! - [`SnapshotClient`]: whole-blob pull/push against `/api/state`
//! - [`SyncScheduler`]: single-slot trailing debounce of pushes
//! - [`CollectionsClient`]: per-domain remote repositories

mod client;
mod collections;
mod error;
mod remote_config;
mod scheduler;
mod session;
mod types;

pub use client::SnapshotClient;
pub use collections::CollectionsClient;
pub use error::{CloudSyncError, Result};
pub use remote_config::RemoteConfig;
pub use scheduler::SyncScheduler;
pub use session::{SessionContext, DEFAULT_ACCESS_CODE};
pub use types::{SnapshotTransport, StatePayload};
