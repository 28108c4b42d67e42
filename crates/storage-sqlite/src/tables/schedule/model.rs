//! Database models for work items and meetings.

use diesel::prelude::*;
use lifeplan_core::schedule::{MeetingItem, WorkItem};

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::work_schedule)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkItemDB {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub priority: String,
    pub created_at: String,
}

impl From<WorkItemDB> for WorkItem {
    fn from(db: WorkItemDB) -> Self {
        WorkItem {
            id: db.id,
            title: db.title,
            description: db.description,
            date: db.date,
            time: db.time,
            priority: db.priority,
            created_at: db.created_at,
        }
    }
}

impl From<WorkItem> for WorkItemDB {
    fn from(item: WorkItem) -> Self {
        WorkItemDB {
            id: item.id,
            title: item.title,
            description: item.description,
            date: item.date,
            time: item.time,
            priority: item.priority,
            created_at: item.created_at,
        }
    }
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::meetings_schedule)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MeetingItemDB {
    pub id: String,
    pub title: String,
    pub with_whom: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub created_at: String,
}

impl From<MeetingItemDB> for MeetingItem {
    fn from(db: MeetingItemDB) -> Self {
        MeetingItem {
            id: db.id,
            title: db.title,
            with_whom: db.with_whom,
            date: db.date,
            time: db.time,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl From<MeetingItem> for MeetingItemDB {
    fn from(item: MeetingItem) -> Self {
        MeetingItemDB {
            id: item.id,
            title: item.title,
            with_whom: item.with_whom,
            date: item.date,
            time: item.time,
            notes: item.notes,
            created_at: item.created_at,
        }
    }
}
