//! Local key-value store abstraction.
//!
//! The raw string-keyed contract is implemented by the storage layer
//! (`lifeplan-storage-sqlite`). [`LocalStore`] layers JSON (de)serialization
//! with fallback-on-corrupt semantics on top and nudges the sync scheduler
//! after every write; local reads never fail the caller.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;
use crate::snapshot::StateSnapshot;

/// Raw persistence contract for the string-keyed local store.
#[async_trait]
pub trait LocalStoreTrait: Send + Sync {
    fn read_raw(&self, key: &str) -> Result<Option<String>>;
    async fn write_raw(&self, key: &str, value: &str) -> Result<()>;
    async fn remove_raw(&self, key: &str) -> Result<()>;

    /// Every stored pair under the sync namespace.
    fn collect_snapshot(&self) -> Result<StateSnapshot>;

    /// Replaces the namespaced portion of the store with `snapshot`,
    /// leaving foreign keys untouched.
    async fn apply_snapshot(&self, snapshot: &StateSnapshot) -> Result<()>;
}

/// Receives a nudge after every local mutation so a cloud push can be
/// debounced and scheduled.
pub trait SyncNotifier: Send + Sync {
    fn schedule_push(&self);
}

/// Notifier for local-only sessions: does nothing.
pub struct NullSyncNotifier;

impl SyncNotifier for NullSyncNotifier {
    fn schedule_push(&self) {}
}

/// JSON view over the raw store.
pub struct LocalStore {
    inner: Arc<dyn LocalStoreTrait>,
    notifier: Arc<dyn SyncNotifier>,
}

impl LocalStore {
    pub fn new(inner: Arc<dyn LocalStoreTrait>, notifier: Arc<dyn SyncNotifier>) -> Self {
        LocalStore { inner, notifier }
    }

    /// Reads and deserializes `key`. Missing data, a failed read, or a
    /// corrupt stored value all yield `fallback`; a read never raises.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.inner.read_raw(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("discarding corrupt value under '{}': {}", key, e);
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(e) => {
                warn!("local read failed for '{}': {}", key, e);
                fallback
            }
        }
    }

    pub async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.inner.write_raw(key, &raw).await?;
        self.notifier.schedule_push();
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove_raw(key).await?;
        self.notifier.schedule_push();
        Ok(())
    }

    pub fn snapshot(&self) -> Result<StateSnapshot> {
        self.inner.collect_snapshot()
    }

    pub async fn apply(&self, snapshot: &StateSnapshot) -> Result<()> {
        self.inner.apply_snapshot(snapshot).await
    }
}

/// In-memory [`LocalStoreTrait`] implementation, used by tests and by
/// ephemeral sessions that opt out of disk persistence.
#[derive(Default)]
pub struct MemoryLocalStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStoreTrait for MemoryLocalStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_raw(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn collect_snapshot(&self) -> Result<StateSnapshot> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(key, _)| StateSnapshot::is_trackable_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    async fn apply_snapshot(&self, snapshot: &StateSnapshot) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|key, _| !StateSnapshot::is_trackable_key(key));
        for (key, value) in &snapshot.entries {
            if StateSnapshot::is_trackable_key(key) {
                entries.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LocalStore {
        LocalStore::new(Arc::new(MemoryLocalStore::new()), Arc::new(NullSyncNotifier))
    }

    #[tokio::test]
    async fn read_returns_fallback_for_missing_and_corrupt_data() {
        let store = store();
        assert_eq!(store.read::<Vec<String>>("lifeplan:missing", vec![]), Vec::<String>::new());

        store
            .inner
            .write_raw("lifeplan:broken", "{not json")
            .await
            .unwrap();
        assert_eq!(store.read::<Vec<String>>("lifeplan:broken", vec![]), Vec::<String>::new());
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let store = store();
        store.write("lifeplan:list", &vec![1, 2, 3]).await.unwrap();
        assert_eq!(store.read::<Vec<i32>>("lifeplan:list", vec![]), vec![1, 2, 3]);

        store.remove("lifeplan:list").await.unwrap();
        assert!(store.read::<Vec<i32>>("lifeplan:list", vec![]).is_empty());
    }

    #[tokio::test]
    async fn apply_snapshot_preserves_foreign_keys() {
        let inner = Arc::new(MemoryLocalStore::new());
        inner.write_raw("other-app:keep", "1").await.unwrap();
        inner.write_raw("lifeplan:old", "2").await.unwrap();

        let mut snapshot = StateSnapshot::new();
        snapshot.insert("lifeplan:new", "3");
        inner.apply_snapshot(&snapshot).await.unwrap();

        assert_eq!(inner.read_raw("other-app:keep").unwrap().as_deref(), Some("1"));
        assert_eq!(inner.read_raw("lifeplan:old").unwrap(), None);
        assert_eq!(inner.read_raw("lifeplan:new").unwrap().as_deref(), Some("3"));
    }
}
