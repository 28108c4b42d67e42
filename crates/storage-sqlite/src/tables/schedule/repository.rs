use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use lifeplan_core::errors::Result;
use lifeplan_core::schedule::{
    MeetingItem, MeetingItemUpdate, ScheduleRepositoryTrait, WorkItem, WorkItemUpdate,
};

use super::model::{MeetingItemDB, WorkItemDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{meetings_schedule, work_schedule};

pub struct ScheduleRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ScheduleRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ScheduleRepository { pool, writer }
    }
}

#[async_trait]
impl ScheduleRepositoryTrait for ScheduleRepository {
    async fn list_work(&self) -> Result<Vec<WorkItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = work_schedule::table
            .order((work_schedule::date.asc(), work_schedule::time.asc()))
            .load::<WorkItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(WorkItem::from).collect())
    }

    async fn insert_work(&self, item: WorkItem) -> Result<()> {
        let row = WorkItemDB::from(item);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(work_schedule::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn update_work(&self, id: &str, update: WorkItemUpdate) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                let row = work_schedule::table
                    .find(&id)
                    .first::<WorkItemDB>(conn)
                    .map_err(StorageError::from)?;
                let mut item = WorkItem::from(row);
                item.apply(update);
                diesel::update(work_schedule::table.find(&id))
                    .set(&WorkItemDB::from(item))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_work(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(work_schedule::table.find(id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn list_meetings(&self) -> Result<Vec<MeetingItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = meetings_schedule::table
            .order((meetings_schedule::date.asc(), meetings_schedule::time.asc()))
            .load::<MeetingItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(MeetingItem::from).collect())
    }

    async fn insert_meeting(&self, item: MeetingItem) -> Result<()> {
        let row = MeetingItemDB::from(item);
        self.writer
            .exec(move |conn| {
                diesel::insert_into(meetings_schedule::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn update_meeting(&self, id: &str, update: MeetingItemUpdate) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                let row = meetings_schedule::table
                    .find(&id)
                    .first::<MeetingItemDB>(conn)
                    .map_err(StorageError::from)?;
                let mut item = MeetingItem::from(row);
                item.apply(update);
                diesel::update(meetings_schedule::table.find(&id))
                    .set(&MeetingItemDB::from(item))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_meeting(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(meetings_schedule::table.find(id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
