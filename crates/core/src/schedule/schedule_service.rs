//! Work and meeting scheduling service.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use crate::calendar::date_key;
use crate::errors::Result;
use crate::schedule::schedule_model::DEFAULT_PRIORITY;
use crate::schedule::{
    MeetingItem, MeetingItemUpdate, NewMeetingItem, NewWorkItem, ScheduleRepositoryTrait,
    WorkItem, WorkItemUpdate,
};

pub struct ScheduleService {
    local: Arc<dyn ScheduleRepositoryTrait>,
    remote: Option<Arc<dyn ScheduleRepositoryTrait>>,
}

impl ScheduleService {
    pub fn new(
        local: Arc<dyn ScheduleRepositoryTrait>,
        remote: Option<Arc<dyn ScheduleRepositoryTrait>>,
    ) -> Self {
        ScheduleService { local, remote }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn ScheduleRepositoryTrait>) -> Fut,
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

    pub async fn work_items(&self) -> Result<Vec<WorkItem>> {
        self.run("work query", |repo| async move { repo.list_work().await })
            .await
    }

    pub async fn meetings(&self) -> Result<Vec<MeetingItem>> {
        self.run("meeting query", |repo| async move {
            repo.list_meetings().await
        })
        .await
    }

    /// Items scheduled for the given day, in listing order.
    pub async fn work_for(&self, day: &str) -> Result<Vec<WorkItem>> {
        Ok(self
            .work_items()
            .await?
            .into_iter()
            .filter(|item| item.date == day)
            .collect())
    }

    pub async fn meetings_for(&self, day: &str) -> Result<Vec<MeetingItem>> {
        Ok(self
            .meetings()
            .await?
            .into_iter()
            .filter(|item| item.date == day)
            .collect())
    }

    pub async fn add_work(&self, payload: NewWorkItem) -> Result<WorkItem> {
        let item = WorkItem {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            date: if payload.date.is_empty() {
                date_key(Utc::now().date_naive())
            } else {
                payload.date
            },
            time: payload.time,
            priority: payload
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            created_at: Utc::now().to_rfc3339(),
        };
        self.run("work insert", |repo| {
            let item = item.clone();
            async move { repo.insert_work(item).await }
        })
        .await?;
        Ok(item)
    }

    pub async fn update_work(&self, id: &str, update: WorkItemUpdate) -> Result<()> {
        self.run("work update", |repo| {
            let id = id.to_string();
            let update = update.clone();
            async move { repo.update_work(&id, update).await }
        })
        .await
    }

    pub async fn delete_work(&self, id: &str) -> Result<()> {
        self.run("work delete", |repo| {
            let id = id.to_string();
            async move { repo.delete_work(&id).await }
        })
        .await
    }

    pub async fn add_meeting(&self, payload: NewMeetingItem) -> Result<MeetingItem> {
        let item = MeetingItem {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            with_whom: payload.with_whom,
            date: payload.date,
            time: payload.time,
            notes: payload.notes,
            created_at: Utc::now().to_rfc3339(),
        };
        self.run("meeting insert", |repo| {
            let item = item.clone();
            async move { repo.insert_meeting(item).await }
        })
        .await?;
        Ok(item)
    }

    pub async fn update_meeting(&self, id: &str, update: MeetingItemUpdate) -> Result<()> {
        self.run("meeting update", |repo| {
            let id = id.to_string();
            let update = update.clone();
            async move { repo.update_meeting(&id, update).await }
        })
        .await
    }

    pub async fn delete_meeting(&self, id: &str) -> Result<()> {
        self.run("meeting delete", |repo| {
            let id = id.to_string();
            async move { repo.delete_meeting(&id).await }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::LocalScheduleRepository;
    use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};

    fn service() -> ScheduleService {
        let store = Arc::new(LocalStore::new(
            Arc::new(MemoryLocalStore::new()),
            Arc::new(NullSyncNotifier),
        ));
        ScheduleService::new(Arc::new(LocalScheduleRepository::new(store)), None)
    }

    fn work(title: &str, date: &str, time: &str) -> NewWorkItem {
        NewWorkItem {
            title: title.to_string(),
            description: String::new(),
            date: date.to_string(),
            time: time.to_string(),
            priority: None,
        }
    }

    #[tokio::test]
    async fn listings_sort_by_date_then_time() {
        let service = service();
        service.add_work(work("late", "2026-04-03", "18:00")).await.unwrap();
        service.add_work(work("early", "2026-04-03", "07:00")).await.unwrap();
        service.add_work(work("previous-day", "2026-04-02", "")).await.unwrap();

        let titles: Vec<_> = service
            .work_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["previous-day", "early", "late"]);
    }

    #[tokio::test]
    async fn day_filters_keep_only_matching_items() {
        let service = service();
        service.add_work(work("today", "2026-04-03", "09:00")).await.unwrap();
        service.add_work(work("tomorrow", "2026-04-04", "09:00")).await.unwrap();

        let todays = service.work_for("2026-04-03").await.unwrap();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].title, "today");
    }

    #[tokio::test]
    async fn missing_priority_defaults_to_medium() {
        let service = service();
        let item = service.add_work(work("t", "2026-04-03", "")).await.unwrap();
        assert_eq!(item.priority, "Medium");
    }

    #[tokio::test]
    async fn meetings_crud_round_trip() {
        let service = service();
        let meeting = service
            .add_meeting(NewMeetingItem {
                title: "sync".into(),
                with_whom: "ops".into(),
                date: "2026-04-03".into(),
                time: "10:00".into(),
                notes: String::new(),
            })
            .await
            .unwrap();

        service
            .update_meeting(
                &meeting.id,
                MeetingItemUpdate {
                    notes: Some("agenda".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(service.meetings().await.unwrap()[0].notes, "agenda");

        service.delete_meeting(&meeting.id).await.unwrap();
        assert!(service.meetings().await.unwrap().is_empty());
    }
}
