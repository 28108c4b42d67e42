//! Daily-log tracking service.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::calendar::{DayType, Zone};
use crate::constants::RANGE_CHUNK_SIZE;
use crate::errors::Result;
use crate::templates::auto_protocol_items;
use crate::tracking::{
    DayLogs, ProtocolLogEntry, ProtocolStatus, RangeLogs, TaskStatus, TimetableLogEntry,
    TrackingRepositoryTrait,
};

pub struct TrackingService {
    local: Arc<dyn TrackingRepositoryTrait>,
    remote: Option<Arc<dyn TrackingRepositoryTrait>>,
}

impl TrackingService {
    pub fn new(
        local: Arc<dyn TrackingRepositoryTrait>,
        remote: Option<Arc<dyn TrackingRepositoryTrait>>,
    ) -> Self {
        TrackingService { local, remote }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn TrackingRepositoryTrait>) -> Fut,
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

    fn now() -> String {
        Utc::now().to_rfc3339()
    }

    pub async fn timetable_day(&self, date_key: &str) -> Result<DayLogs<TimetableLogEntry>> {
        self.run("timetable query", |repo| {
            let key = date_key.to_string();
            async move { repo.timetable_day(&key).await }
        })
        .await
    }

    pub async fn mark_task(
        &self,
        date_key: &str,
        task_id: &str,
        status: TaskStatus,
        zone: Zone,
    ) -> Result<()> {
        let entry = TimetableLogEntry {
            status,
            zone,
            timestamp: Self::now(),
        };
        self.run("timetable upsert", |repo| {
            let date_key = date_key.to_string();
            let task_id = task_id.to_string();
            let entry = entry.clone();
            async move { repo.upsert_timetable(&date_key, &task_id, entry).await }
        })
        .await
    }

    pub async fn protocol_day(&self, date_key: &str) -> Result<DayLogs<ProtocolLogEntry>> {
        self.run("protocol query", |repo| {
            let key = date_key.to_string();
            async move { repo.protocol_day(&key).await }
        })
        .await
    }

    pub async fn mark_protocol(
        &self,
        date_key: &str,
        item_id: &str,
        status: ProtocolStatus,
        zone: Zone,
    ) -> Result<()> {
        let entry = ProtocolLogEntry {
            status,
            zone,
            auto: false,
            timestamp: Self::now(),
        };
        self.run("protocol upsert", |repo| {
            let date_key = date_key.to_string();
            let item_id = item_id.to_string();
            let entry = entry.clone();
            async move { repo.upsert_protocol(&date_key, &item_id, entry).await }
        })
        .await
    }

    /// Records the items the day's template waives (`na` on Sundays,
    /// `passed` for the nomad phone rule) without touching entries the
    /// user has already set.
    pub async fn ensure_auto_marks(
        &self,
        date_key: &str,
        zone: Zone,
        day_type: DayType,
    ) -> Result<()> {
        let auto_items = auto_protocol_items(zone, day_type);
        if auto_items.is_empty() {
            return Ok(());
        }
        let status = if day_type == DayType::Sunday {
            ProtocolStatus::Na
        } else {
            ProtocolStatus::Passed
        };

        let existing = self.protocol_day(date_key).await?;
        for item_id in auto_items {
            if existing.contains_key(*item_id) {
                continue;
            }
            let entry = ProtocolLogEntry {
                status,
                zone,
                auto: true,
                timestamp: Self::now(),
            };
            self.run("protocol auto-mark", |repo| {
                let date_key = date_key.to_string();
                let item_id = item_id.to_string();
                let entry = entry.clone();
                async move { repo.upsert_protocol(&date_key, &item_id, entry).await }
            })
            .await?;
        }
        Ok(())
    }

    /// Timetable logs for a date range, chunked so a long range stays a
    /// bounded number of queries. A chunk that fails remotely falls back
    /// to the local copy for just those days.
    pub async fn timetable_range(
        &self,
        date_keys: &[String],
    ) -> Result<RangeLogs<TimetableLogEntry>> {
        let mut merged = RangeLogs::new();
        for chunk in date_keys.chunks(RANGE_CHUNK_SIZE) {
            let part = match &self.remote {
                Some(remote) => match remote.timetable_range(chunk).await {
                    Ok(part) => part,
                    Err(e) => {
                        warn!("remote timetable range failed, using local store: {}", e);
                        self.local.timetable_range(chunk).await?
                    }
                },
                None => self.local.timetable_range(chunk).await?,
            };
            merged.extend(part);
        }
        // Every requested day is present in the result.
        for key in date_keys {
            merged.entry(key.clone()).or_default();
        }
        Ok(merged)
    }

    pub async fn protocol_range(&self, date_keys: &[String]) -> Result<RangeLogs<ProtocolLogEntry>> {
        let mut merged = RangeLogs::new();
        for chunk in date_keys.chunks(RANGE_CHUNK_SIZE) {
            let part = match &self.remote {
                Some(remote) => match remote.protocol_range(chunk).await {
                    Ok(part) => part,
                    Err(e) => {
                        warn!("remote protocol range failed, using local store: {}", e);
                        self.local.protocol_range(chunk).await?
                    }
                },
                None => self.local.protocol_range(chunk).await?,
            };
            merged.extend(part);
        }
        for key in date_keys {
            merged.entry(key.clone()).or_default();
        }
        Ok(merged)
    }

    /// Drops both log kinds for one day.
    pub async fn clear_day(&self, date_key: &str) -> Result<()> {
        self.run("timetable clear", |repo| {
            let key = date_key.to_string();
            async move { repo.clear_timetable_day(&key).await }
        })
        .await?;
        self.run("protocol clear", |repo| {
            let key = date_key.to_string();
            async move { repo.clear_protocol_day(&key).await }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};
    use crate::tracking::LocalTrackingRepository;

    fn service() -> TrackingService {
        let store = Arc::new(LocalStore::new(
            Arc::new(MemoryLocalStore::new()),
            Arc::new(NullSyncNotifier),
        ));
        TrackingService::new(Arc::new(LocalTrackingRepository::new(store)), None)
    }

    #[tokio::test]
    async fn marking_a_task_twice_keeps_the_last_status() {
        let service = service();
        service
            .mark_task("2026-04-02", "w1", TaskStatus::Complete, Zone::Working)
            .await
            .unwrap();
        service
            .mark_task("2026-04-02", "w1", TaskStatus::Skipped, Zone::Working)
            .await
            .unwrap();

        let day = service.timetable_day("2026-04-02").await.unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day["w1"].status, TaskStatus::Skipped);
    }

    #[tokio::test]
    async fn sunday_auto_marks_waive_missing_items_as_na() {
        let service = service();
        // The user already failed one of the auto items; it must survive.
        service
            .mark_protocol("2026-04-05", "headspace", ProtocolStatus::Failed, Zone::Working)
            .await
            .unwrap();

        service
            .ensure_auto_marks("2026-04-05", Zone::Working, DayType::Sunday)
            .await
            .unwrap();

        let day = service.protocol_day("2026-04-05").await.unwrap();
        assert_eq!(day["headspace"].status, ProtocolStatus::Failed);
        assert!(!day["headspace"].auto);
        assert_eq!(day["no_phone"].status, ProtocolStatus::Na);
        assert!(day["no_phone"].auto);
        assert_eq!(day["worked_out"].status, ProtocolStatus::Na);
    }

    #[tokio::test]
    async fn nomad_auto_marks_pass_the_phone_rule_only() {
        let service = service();
        service
            .ensure_auto_marks("2026-04-20", Zone::Nomad, DayType::Normal)
            .await
            .unwrap();

        let day = service.protocol_day("2026-04-20").await.unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day["no_phone"].status, ProtocolStatus::Passed);

        // Working weekdays have nothing to auto-mark.
        service
            .ensure_auto_marks("2026-04-02", Zone::Working, DayType::Normal)
            .await
            .unwrap();
        assert!(service.protocol_day("2026-04-02").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ranges_cover_every_requested_day() {
        let service = service();
        service
            .mark_task("2026-04-01", "w1", TaskStatus::Complete, Zone::Working)
            .await
            .unwrap();

        let keys: Vec<String> = vec!["2026-04-01".into(), "2026-04-02".into()];
        let range = service.timetable_range(&keys).await.unwrap();
        assert_eq!(range.len(), 2);
        assert_eq!(range["2026-04-01"].len(), 1);
        assert!(range["2026-04-02"].is_empty());
    }

    #[tokio::test]
    async fn clear_day_drops_both_log_kinds() {
        let service = service();
        service
            .mark_task("2026-04-02", "w1", TaskStatus::Complete, Zone::Working)
            .await
            .unwrap();
        service
            .mark_protocol("2026-04-02", "no_sugar", ProtocolStatus::Passed, Zone::Working)
            .await
            .unwrap();

        service.clear_day("2026-04-02").await.unwrap();
        assert!(service.timetable_day("2026-04-02").await.unwrap().is_empty());
        assert!(service.protocol_day("2026-04-02").await.unwrap().is_empty());
    }
}
