//! Connections module - daily new-connection counts.

mod connections_local;
mod connections_model;
mod connections_service;
mod connections_traits;

pub use connections_local::LocalConnectionRepository;
pub use connections_model::ConnectionLog;
pub use connections_service::ConnectionService;
pub use connections_traits::ConnectionRepositoryTrait;
