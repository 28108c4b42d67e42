//! Connection-count service.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::connections::{ConnectionLog, ConnectionRepositoryTrait};
use crate::constants::RANGE_CHUNK_SIZE;
use crate::errors::Result;

pub struct ConnectionService {
    local: Arc<dyn ConnectionRepositoryTrait>,
    remote: Option<Arc<dyn ConnectionRepositoryTrait>>,
}

impl ConnectionService {
    pub fn new(
        local: Arc<dyn ConnectionRepositoryTrait>,
        remote: Option<Arc<dyn ConnectionRepositoryTrait>>,
    ) -> Self {
        ConnectionService { local, remote }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn ConnectionRepositoryTrait>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(remote) = &self.remote {
            match op(Arc::clone(remote)).await {
                Ok(value) => return Ok(value),
                Err(e) => warn!("remote {} failed, using local store: {}", label, e),
            }
        }
        op(Arc::clone(&self.local)).await
    }

    /// A day with no record counts as zero.
    pub async fn count(&self, date_key: &str) -> Result<i64> {
        let log = self
            .run("connections query", |repo| {
                let key = date_key.to_string();
                async move { repo.get_connections(&key).await }
            })
            .await?;
        Ok(log.map(|log| log.count).unwrap_or(0))
    }

    /// Stores the day's count, clamped at zero.
    pub async fn save_count(&self, date_key: &str, count: i64) -> Result<()> {
        let log = ConnectionLog {
            count: count.max(0),
            updated_at: Some(Utc::now().to_rfc3339()),
        };
        self.run("connections upsert", |repo| {
            let key = date_key.to_string();
            let log = log.clone();
            async move { repo.upsert_connections(&key, log).await }
        })
        .await
    }

    pub async fn clear(&self, date_key: &str) -> Result<()> {
        self.run("connections delete", |repo| {
            let key = date_key.to_string();
            async move { repo.delete_connections(&key).await }
        })
        .await
    }

    /// Counts for a date range, batched to bound the number of backend
    /// queries. A chunk that fails remotely falls back to the local store
    /// for just that chunk.
    pub async fn range(&self, date_keys: &[String]) -> Result<BTreeMap<String, ConnectionLog>> {
        let mut merged = BTreeMap::new();
        for chunk in date_keys.chunks(RANGE_CHUNK_SIZE) {
            let part = match &self.remote {
                Some(remote) => match remote.connections_range(chunk).await {
                    Ok(part) => part,
                    Err(e) => {
                        warn!("remote connections range failed, using local store: {}", e);
                        self.local.connections_range(chunk).await?
                    }
                },
                None => self.local.connections_range(chunk).await?,
            };
            merged.extend(part);
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections::LocalConnectionRepository;
    use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};

    fn service() -> ConnectionService {
        let store = Arc::new(LocalStore::new(
            Arc::new(MemoryLocalStore::new()),
            Arc::new(NullSyncNotifier),
        ));
        ConnectionService::new(Arc::new(LocalConnectionRepository::new(store)), None)
    }

    #[tokio::test]
    async fn missing_day_counts_as_zero() {
        let service = service();
        assert_eq!(service.count("2026-04-02").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn counts_are_clamped_and_last_write_wins() {
        let service = service();
        service.save_count("2026-04-02", -3).await.unwrap();
        assert_eq!(service.count("2026-04-02").await.unwrap(), 0);

        service.save_count("2026-04-02", 7).await.unwrap();
        assert_eq!(service.count("2026-04-02").await.unwrap(), 7);
    }

    #[tokio::test]
    async fn range_returns_only_recorded_days() {
        let service = service();
        service.save_count("2026-04-01", 2).await.unwrap();
        service.save_count("2026-04-03", 5).await.unwrap();

        let keys: Vec<String> = vec![
            "2026-04-01".into(),
            "2026-04-02".into(),
            "2026-04-03".into(),
        ];
        let range = service.range(&keys).await.unwrap();
        assert_eq!(range.len(), 2);
        assert_eq!(range["2026-04-01"].count, 2);
        assert!(!range.contains_key("2026-04-02"));
    }
}
