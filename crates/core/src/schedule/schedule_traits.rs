use async_trait::async_trait;

use crate::errors::Result;
use crate::schedule::{MeetingItem, MeetingItemUpdate, WorkItem, WorkItemUpdate};

/// Trait for schedule repository operations. Listings are ordered by
/// `(date, time)` ascending.
#[async_trait]
pub trait ScheduleRepositoryTrait: Send + Sync {
    async fn list_work(&self) -> Result<Vec<WorkItem>>;
    async fn insert_work(&self, item: WorkItem) -> Result<()>;
    async fn update_work(&self, id: &str, update: WorkItemUpdate) -> Result<()>;
    async fn delete_work(&self, id: &str) -> Result<()>;

    async fn list_meetings(&self) -> Result<Vec<MeetingItem>>;
    async fn insert_meeting(&self, item: MeetingItem) -> Result<()>;
    async fn update_meeting(&self, id: &str, update: MeetingItemUpdate) -> Result<()>;
    async fn delete_meeting(&self, id: &str) -> Result<()>;
}
