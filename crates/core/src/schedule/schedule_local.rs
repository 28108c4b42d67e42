//! Key-value backed schedule repository (local fallback mode).

use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::FALLBACK_PREFIX;
use crate::errors::{Result, ValidationError};
use crate::schedule::schedule_model::date_time_key;
use crate::schedule::{
    MeetingItem, MeetingItemUpdate, ScheduleRepositoryTrait, WorkItem, WorkItemUpdate,
};
use crate::store::LocalStore;

fn work_key() -> String {
    format!("{}:work_schedule", FALLBACK_PREFIX)
}

fn meetings_key() -> String {
    format!("{}:meetings_schedule", FALLBACK_PREFIX)
}

pub struct LocalScheduleRepository {
    store: Arc<LocalStore>,
}

impl LocalScheduleRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalScheduleRepository { store }
    }
}

#[async_trait]
impl ScheduleRepositoryTrait for LocalScheduleRepository {
    async fn list_work(&self) -> Result<Vec<WorkItem>> {
        let mut items: Vec<WorkItem> = self.store.read(&work_key(), Vec::new());
        items.sort_by_key(|item| date_time_key(&item.date, &item.time));
        Ok(items)
    }

    async fn insert_work(&self, item: WorkItem) -> Result<()> {
        let mut items: Vec<WorkItem> = self.store.read(&work_key(), Vec::new());
        items.push(item);
        self.store.write(&work_key(), &items).await
    }

    async fn update_work(&self, id: &str, update: WorkItemUpdate) -> Result<()> {
        let mut items: Vec<WorkItem> = self.store.read(&work_key(), Vec::new());
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ValidationError::MissingRecord(id.to_string()))?;
        item.apply(update);
        self.store.write(&work_key(), &items).await
    }

    async fn delete_work(&self, id: &str) -> Result<()> {
        let mut items: Vec<WorkItem> = self.store.read(&work_key(), Vec::new());
        items.retain(|item| item.id != id);
        self.store.write(&work_key(), &items).await
    }

    async fn list_meetings(&self) -> Result<Vec<MeetingItem>> {
        let mut items: Vec<MeetingItem> = self.store.read(&meetings_key(), Vec::new());
        items.sort_by_key(|item| date_time_key(&item.date, &item.time));
        Ok(items)
    }

    async fn insert_meeting(&self, item: MeetingItem) -> Result<()> {
        let mut items: Vec<MeetingItem> = self.store.read(&meetings_key(), Vec::new());
        items.push(item);
        self.store.write(&meetings_key(), &items).await
    }

    async fn update_meeting(&self, id: &str, update: MeetingItemUpdate) -> Result<()> {
        let mut items: Vec<MeetingItem> = self.store.read(&meetings_key(), Vec::new());
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ValidationError::MissingRecord(id.to_string()))?;
        item.apply(update);
        self.store.write(&meetings_key(), &items).await
    }

    async fn delete_meeting(&self, id: &str) -> Result<()> {
        let mut items: Vec<MeetingItem> = self.store.read(&meetings_key(), Vec::new());
        items.retain(|item| item.id != id);
        self.store.write(&meetings_key(), &items).await
    }
}
