//! Table-backed repository implementations.
//!
//! These implement the core repository traits over real per-domain tables
//! and back the server's collections API (the "richer backend" a remote
//! client can query). Local-only sessions never touch them; they use the
//! key-value fallback repositories in `lifeplan-core` instead.

pub mod brands;
pub mod connections;
pub mod ideas;
pub mod planning;
pub mod schedule;
pub mod settings;
pub mod tracking;
