use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::connections::ConnectionLog;
use crate::errors::Result;

/// Trait for connection-count repository operations.
#[async_trait]
pub trait ConnectionRepositoryTrait: Send + Sync {
    async fn get_connections(&self, date_key: &str) -> Result<Option<ConnectionLog>>;
    async fn upsert_connections(&self, date_key: &str, log: ConnectionLog) -> Result<()>;
    async fn delete_connections(&self, date_key: &str) -> Result<()>;

    /// Point lookups for a batch of at most [`crate::constants::RANGE_CHUNK_SIZE`]
    /// date keys; days without a record are simply absent from the map.
    async fn connections_range(
        &self,
        date_keys: &[String],
    ) -> Result<BTreeMap<String, ConnectionLog>>;
}
