//! Key-value backed connection repository (local fallback mode).
//!
//! All days share one map under a single namespaced key.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::connections::{ConnectionLog, ConnectionRepositoryTrait};
use crate::constants::FALLBACK_PREFIX;
use crate::errors::Result;
use crate::store::LocalStore;

fn collection_key() -> String {
    format!("{}:connections", FALLBACK_PREFIX)
}

pub struct LocalConnectionRepository {
    store: Arc<LocalStore>,
}

impl LocalConnectionRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalConnectionRepository { store }
    }

    fn load(&self) -> BTreeMap<String, ConnectionLog> {
        self.store.read(&collection_key(), BTreeMap::new())
    }
}

#[async_trait]
impl ConnectionRepositoryTrait for LocalConnectionRepository {
    async fn get_connections(&self, date_key: &str) -> Result<Option<ConnectionLog>> {
        Ok(self.load().get(date_key).cloned())
    }

    async fn upsert_connections(&self, date_key: &str, log: ConnectionLog) -> Result<()> {
        let mut map = self.load();
        map.insert(date_key.to_string(), log);
        self.store.write(&collection_key(), &map).await
    }

    async fn delete_connections(&self, date_key: &str) -> Result<()> {
        let mut map = self.load();
        map.remove(date_key);
        self.store.write(&collection_key(), &map).await
    }

    async fn connections_range(
        &self,
        date_keys: &[String],
    ) -> Result<BTreeMap<String, ConnectionLog>> {
        let map = self.load();
        Ok(date_keys
            .iter()
            .filter_map(|key| map.get(key).map(|log| (key.clone(), log.clone())))
            .collect())
    }
}
