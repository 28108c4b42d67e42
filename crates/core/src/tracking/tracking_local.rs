//! Key-value backed tracking repository (local fallback mode).
//!
//! Logs are partitioned per day: one namespaced key per (kind, date).

use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::FALLBACK_PREFIX;
use crate::errors::Result;
use crate::store::LocalStore;
use crate::tracking::{
    DayLogs, ProtocolLogEntry, RangeLogs, TimetableLogEntry, TrackingRepositoryTrait,
};

fn timetable_key(date_key: &str) -> String {
    format!("{}:timetable:{}", FALLBACK_PREFIX, date_key)
}

fn protocol_key(date_key: &str) -> String {
    format!("{}:protocol:{}", FALLBACK_PREFIX, date_key)
}

pub struct LocalTrackingRepository {
    store: Arc<LocalStore>,
}

impl LocalTrackingRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalTrackingRepository { store }
    }
}

#[async_trait]
impl TrackingRepositoryTrait for LocalTrackingRepository {
    async fn timetable_day(&self, date_key: &str) -> Result<DayLogs<TimetableLogEntry>> {
        Ok(self.store.read(&timetable_key(date_key), DayLogs::new()))
    }

    async fn upsert_timetable(
        &self,
        date_key: &str,
        task_id: &str,
        entry: TimetableLogEntry,
    ) -> Result<()> {
        let mut day = self.timetable_day(date_key).await?;
        day.insert(task_id.to_string(), entry);
        self.store.write(&timetable_key(date_key), &day).await
    }

    async fn timetable_range(&self, date_keys: &[String]) -> Result<RangeLogs<TimetableLogEntry>> {
        let mut range = RangeLogs::new();
        for date_key in date_keys {
            range.insert(date_key.clone(), self.timetable_day(date_key).await?);
        }
        Ok(range)
    }

    async fn clear_timetable_day(&self, date_key: &str) -> Result<()> {
        self.store.remove(&timetable_key(date_key)).await
    }

    async fn protocol_day(&self, date_key: &str) -> Result<DayLogs<ProtocolLogEntry>> {
        Ok(self.store.read(&protocol_key(date_key), DayLogs::new()))
    }

    async fn upsert_protocol(
        &self,
        date_key: &str,
        item_id: &str,
        entry: ProtocolLogEntry,
    ) -> Result<()> {
        let mut day = self.protocol_day(date_key).await?;
        day.insert(item_id.to_string(), entry);
        self.store.write(&protocol_key(date_key), &day).await
    }

    async fn protocol_range(&self, date_keys: &[String]) -> Result<RangeLogs<ProtocolLogEntry>> {
        let mut range = RangeLogs::new();
        for date_key in date_keys {
            range.insert(date_key.clone(), self.protocol_day(date_key).await?);
        }
        Ok(range)
    }

    async fn clear_protocol_day(&self, date_key: &str) -> Result<()> {
        self.store.remove(&protocol_key(date_key)).await
    }
}
