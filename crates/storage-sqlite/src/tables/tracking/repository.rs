use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use lifeplan_core::errors::Result;
use lifeplan_core::tracking::{
    DayLogs, ProtocolLogEntry, RangeLogs, TimetableLogEntry, TrackingRepositoryTrait,
};

use super::model::{ProtocolLogDB, TimetableLogDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{protocol_logs, timetable_logs};

pub struct TrackingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TrackingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TrackingRepository { pool, writer }
    }
}

fn collect_timetable(rows: Vec<TimetableLogDB>) -> RangeLogs<TimetableLogEntry> {
    let mut range = RangeLogs::new();
    for row in rows {
        if let Some((date, task_id, entry)) = row.into_entry() {
            range.entry(date).or_default().insert(task_id, entry);
        }
    }
    range
}

fn collect_protocol(rows: Vec<ProtocolLogDB>) -> RangeLogs<ProtocolLogEntry> {
    let mut range = RangeLogs::new();
    for row in rows {
        if let Some((date, item_id, entry)) = row.into_entry() {
            range.entry(date).or_default().insert(item_id, entry);
        }
    }
    range
}

#[async_trait]
impl TrackingRepositoryTrait for TrackingRepository {
    async fn timetable_day(&self, date_key: &str) -> Result<DayLogs<TimetableLogEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = timetable_logs::table
            .filter(timetable_logs::date.eq(date_key))
            .load::<TimetableLogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(collect_timetable(rows).remove(date_key).unwrap_or_default())
    }

    async fn upsert_timetable(
        &self,
        date_key: &str,
        task_id: &str,
        entry: TimetableLogEntry,
    ) -> Result<()> {
        let row = TimetableLogDB::from_entry(date_key, task_id, entry);
        self.writer
            .exec(move |conn| {
                diesel::replace_into(timetable_logs::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn timetable_range(&self, date_keys: &[String]) -> Result<RangeLogs<TimetableLogEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = timetable_logs::table
            .filter(timetable_logs::date.eq_any(date_keys))
            .load::<TimetableLogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(collect_timetable(rows))
    }

    async fn clear_timetable_day(&self, date_key: &str) -> Result<()> {
        let date_key = date_key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(timetable_logs::table.filter(timetable_logs::date.eq(date_key)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn protocol_day(&self, date_key: &str) -> Result<DayLogs<ProtocolLogEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = protocol_logs::table
            .filter(protocol_logs::date.eq(date_key))
            .load::<ProtocolLogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(collect_protocol(rows).remove(date_key).unwrap_or_default())
    }

    async fn upsert_protocol(
        &self,
        date_key: &str,
        item_id: &str,
        entry: ProtocolLogEntry,
    ) -> Result<()> {
        let row = ProtocolLogDB::from_entry(date_key, item_id, entry);
        self.writer
            .exec(move |conn| {
                diesel::replace_into(protocol_logs::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn protocol_range(&self, date_keys: &[String]) -> Result<RangeLogs<ProtocolLogEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = protocol_logs::table
            .filter(protocol_logs::date.eq_any(date_keys))
            .load::<ProtocolLogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(collect_protocol(rows))
    }

    async fn clear_protocol_day(&self, date_key: &str) -> Result<()> {
        let date_key = date_key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(protocol_logs::table.filter(protocol_logs::date.eq(date_key)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
