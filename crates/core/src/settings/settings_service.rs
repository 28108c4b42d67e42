//! Settings service, plus the day-reset and export maintenance actions.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use log::warn;
use serde_json::json;

use crate::brands::BrandService;
use crate::calendar::date_key;
use crate::connections::ConnectionService;
use crate::errors::Result;
use crate::ideas::IdeaService;
use crate::planning::PlanningService;
use crate::schedule::ScheduleService;
use crate::settings::{Settings, SettingsRepositoryTrait, SettingsUpdate};
use crate::tracking::TrackingService;

pub struct SettingsService {
    local: Arc<dyn SettingsRepositoryTrait>,
    remote: Option<Arc<dyn SettingsRepositoryTrait>>,
    tracking: Arc<TrackingService>,
    connections: Arc<ConnectionService>,
}

impl SettingsService {
    pub fn new(
        local: Arc<dyn SettingsRepositoryTrait>,
        remote: Option<Arc<dyn SettingsRepositoryTrait>>,
        tracking: Arc<TrackingService>,
        connections: Arc<ConnectionService>,
    ) -> Self {
        SettingsService {
            local,
            remote,
            tracking,
            connections,
        }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn SettingsRepositoryTrait>) -> Fut,
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

    fn today() -> String {
        date_key(Utc::now().date_naive())
    }

    /// Stored settings with blanks filled from the defaults.
    pub async fn get(&self) -> Result<Settings> {
        let today = Self::today();
        let stored = self
            .run("settings query", |repo| async move {
                repo.get_settings().await
            })
            .await?;
        Ok(stored
            .unwrap_or_else(|| Settings::defaults_for(&today))
            .merged_with_defaults(&today))
    }

    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings> {
        let mut settings = self.get().await?;
        settings.apply(update);
        settings.updated_at = Some(Utc::now().to_rfc3339());
        self.run("settings upsert", |repo| {
            let settings = settings.clone();
            async move { repo.upsert_settings(settings).await }
        })
        .await?;
        Ok(settings)
    }

    pub async fn set_last_visit_date(&self, day: &str) -> Result<Settings> {
        self.update(SettingsUpdate {
            last_visit_date: Some(Some(day.to_string())),
            ..Default::default()
        })
        .await
    }

    /// Drops today's timetable and protocol logs and the day's connection
    /// count. Nothing else is touched.
    pub async fn clear_today(&self) -> Result<()> {
        let today = Self::today();
        self.tracking.clear_day(&today).await?;
        self.connections.clear(&today).await
    }

    /// One JSON document with every listable collection, for manual backup.
    pub async fn export_all(
        &self,
        ideas: &IdeaService,
        brands: &BrandService,
        planning: &PlanningService,
        schedule: &ScheduleService,
    ) -> Result<serde_json::Value> {
        let settings = self.get().await?;
        Ok(json!({
            "work_schedule": schedule.work_items().await?,
            "meetings_schedule": schedule.meetings().await?,
            "ideas": ideas.list().await?,
            "currentBrand": brands.current().await?,
            "brands_pipeline": brands.pipeline().await?,
            "brands_live": brands.live().await?,
            "brands_archive": brands.archive().await?,
            "planning_monthly": planning.list_monthly().await?,
            "settings": settings,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Zone;
    use crate::connections::LocalConnectionRepository;
    use crate::settings::LocalSettingsRepository;
    use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};
    use crate::tracking::{LocalTrackingRepository, TaskStatus};

    fn services() -> (SettingsService, Arc<TrackingService>, Arc<ConnectionService>) {
        let store = Arc::new(LocalStore::new(
            Arc::new(MemoryLocalStore::new()),
            Arc::new(NullSyncNotifier),
        ));
        let tracking = Arc::new(TrackingService::new(
            Arc::new(LocalTrackingRepository::new(Arc::clone(&store))),
            None,
        ));
        let connections = Arc::new(ConnectionService::new(
            Arc::new(LocalConnectionRepository::new(Arc::clone(&store))),
            None,
        ));
        let settings = SettingsService::new(
            Arc::new(LocalSettingsRepository::new(store)),
            None,
            Arc::clone(&tracking),
            Arc::clone(&connections),
        );
        (settings, tracking, connections)
    }

    #[tokio::test]
    async fn missing_settings_read_as_defaults() {
        let (settings, _, _) = services();
        let value = settings.get().await.unwrap();
        assert_eq!(
            value.dream_version_description,
            "Build an unstoppable body, mind, and business machine."
        );
        assert!(!value.countdown_start_date.is_empty());
        assert_eq!(value.last_visit_date, None);
    }

    #[tokio::test]
    async fn updates_persist_and_merge() {
        let (settings, _, _) = services();
        settings
            .update(SettingsUpdate {
                dream_version_description: Some("new dream".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        let value = settings.set_last_visit_date("2026-04-02").await.unwrap();
        assert_eq!(value.dream_version_description, "new dream");
        assert_eq!(value.last_visit_date.as_deref(), Some("2026-04-02"));
    }

    #[tokio::test]
    async fn clear_today_drops_only_todays_logs() {
        let (settings, tracking, connections) = services();
        let today = SettingsService::today();
        tracking
            .mark_task(&today, "w1", TaskStatus::Complete, Zone::Working)
            .await
            .unwrap();
        tracking
            .mark_task("2020-01-01", "w1", TaskStatus::Complete, Zone::Working)
            .await
            .unwrap();
        connections.save_count(&today, 4).await.unwrap();

        settings.clear_today().await.unwrap();

        assert!(tracking.timetable_day(&today).await.unwrap().is_empty());
        assert_eq!(tracking.timetable_day("2020-01-01").await.unwrap().len(), 1);
        assert_eq!(connections.count(&today).await.unwrap(), 0);
    }
}
