use async_trait::async_trait;

use crate::errors::Result;
use crate::tracking::{DayLogs, ProtocolLogEntry, RangeLogs, TimetableLogEntry};

/// Trait for daily-log repository operations. Upserts replace the existing
/// record for the same `(date, item)` pair. Range queries take a batch of
/// at most [`crate::constants::RANGE_CHUNK_SIZE`] date keys.
#[async_trait]
pub trait TrackingRepositoryTrait: Send + Sync {
    async fn timetable_day(&self, date_key: &str) -> Result<DayLogs<TimetableLogEntry>>;
    async fn upsert_timetable(
        &self,
        date_key: &str,
        task_id: &str,
        entry: TimetableLogEntry,
    ) -> Result<()>;
    async fn timetable_range(&self, date_keys: &[String]) -> Result<RangeLogs<TimetableLogEntry>>;
    async fn clear_timetable_day(&self, date_key: &str) -> Result<()>;

    async fn protocol_day(&self, date_key: &str) -> Result<DayLogs<ProtocolLogEntry>>;
    async fn upsert_protocol(
        &self,
        date_key: &str,
        item_id: &str,
        entry: ProtocolLogEntry,
    ) -> Result<()>;
    async fn protocol_range(&self, date_keys: &[String]) -> Result<RangeLogs<ProtocolLogEntry>>;
    async fn clear_protocol_day(&self, date_key: &str) -> Result<()>;
}
