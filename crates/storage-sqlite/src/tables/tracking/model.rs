//! Database models for the daily log tables.
//!
//! Rows with an unrecognized status or zone are dropped on read instead of
//! failing the whole query.

use diesel::prelude::*;
use lifeplan_core::calendar::Zone;
use lifeplan_core::tracking::{ProtocolLogEntry, ProtocolStatus, TaskStatus, TimetableLogEntry};

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::timetable_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TimetableLogDB {
    pub date: String,
    pub task_id: String,
    pub status: String,
    pub zone: String,
    pub updated_at: String,
}

impl TimetableLogDB {
    pub fn from_entry(date: &str, task_id: &str, entry: TimetableLogEntry) -> Self {
        TimetableLogDB {
            date: date.to_string(),
            task_id: task_id.to_string(),
            status: entry.status.as_db_str().to_string(),
            zone: entry.zone.as_str().to_string(),
            updated_at: entry.timestamp,
        }
    }

    pub fn into_entry(self) -> Option<(String, String, TimetableLogEntry)> {
        let entry = TimetableLogEntry {
            status: TaskStatus::from_db_str(&self.status)?,
            zone: Zone::from_db_str(&self.zone)?,
            timestamp: self.updated_at,
        };
        Some((self.date, self.task_id, entry))
    }
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::protocol_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProtocolLogDB {
    pub date: String,
    pub item_id: String,
    pub status: String,
    pub zone: String,
    pub auto: bool,
    pub updated_at: String,
}

impl ProtocolLogDB {
    pub fn from_entry(date: &str, item_id: &str, entry: ProtocolLogEntry) -> Self {
        ProtocolLogDB {
            date: date.to_string(),
            item_id: item_id.to_string(),
            status: entry.status.as_db_str().to_string(),
            zone: entry.zone.as_str().to_string(),
            auto: entry.auto,
            updated_at: entry.timestamp,
        }
    }

    pub fn into_entry(self) -> Option<(String, String, ProtocolLogEntry)> {
        let entry = ProtocolLogEntry {
            status: ProtocolStatus::from_db_str(&self.status)?,
            zone: Zone::from_db_str(&self.zone)?,
            auto: self.auto,
            timestamp: self.updated_at,
        };
        Some((self.date, self.item_id, entry))
    }
}
