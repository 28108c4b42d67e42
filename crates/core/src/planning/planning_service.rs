//! Planning service.

use std::future::Future;
use std::sync::Arc;

use log::warn;

use crate::errors::Result;
use crate::planning::{
    DailyPlan, MonthlyPlan, MonthlyPlanRecord, PlanningRepositoryTrait, WeeklyPlan,
};

/// Point lookups return an empty plan when nothing is stored for the key;
/// callers never see "absent" as an error.
pub struct PlanningService {
    local: Arc<dyn PlanningRepositoryTrait>,
    remote: Option<Arc<dyn PlanningRepositoryTrait>>,
}

impl PlanningService {
    pub fn new(
        local: Arc<dyn PlanningRepositoryTrait>,
        remote: Option<Arc<dyn PlanningRepositoryTrait>>,
    ) -> Self {
        PlanningService { local, remote }
    }

    async fn run<T, F, Fut>(&self, label: &str, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn PlanningRepositoryTrait>) -> Fut,
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

    pub async fn monthly(&self, month_key: &str) -> Result<MonthlyPlan> {
        self.run("monthly-plan query", |repo| {
            let key = month_key.to_string();
            async move { repo.get_monthly(&key).await }
        })
        .await
        .map(Option::unwrap_or_default)
    }

    pub async fn save_monthly(&self, month_key: &str, plan: MonthlyPlan) -> Result<()> {
        self.run("monthly-plan upsert", |repo| {
            let key = month_key.to_string();
            let plan = plan.clone();
            async move { repo.upsert_monthly(&key, plan).await }
        })
        .await
    }

    pub async fn weekly(&self, week_key: &str) -> Result<WeeklyPlan> {
        self.run("weekly-plan query", |repo| {
            let key = week_key.to_string();
            async move { repo.get_weekly(&key).await }
        })
        .await
        .map(Option::unwrap_or_default)
    }

    pub async fn save_weekly(&self, week_key: &str, plan: WeeklyPlan) -> Result<()> {
        self.run("weekly-plan upsert", |repo| {
            let key = week_key.to_string();
            let plan = plan.clone();
            async move { repo.upsert_weekly(&key, plan).await }
        })
        .await
    }

    pub async fn daily(&self, date_key: &str) -> Result<DailyPlan> {
        self.run("daily-plan query", |repo| {
            let key = date_key.to_string();
            async move { repo.get_daily(&key).await }
        })
        .await
        .map(Option::unwrap_or_default)
    }

    pub async fn save_daily(&self, date_key: &str, plan: DailyPlan) -> Result<()> {
        self.run("daily-plan upsert", |repo| {
            let key = date_key.to_string();
            let plan = plan.clone();
            async move { repo.upsert_daily(&key, plan).await }
        })
        .await
    }

    pub async fn list_monthly(&self) -> Result<Vec<MonthlyPlanRecord>> {
        self.run("monthly-plan list", |repo| async move {
            repo.list_monthly().await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::LocalPlanningRepository;
    use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};

    fn service() -> PlanningService {
        let store = Arc::new(LocalStore::new(
            Arc::new(MemoryLocalStore::new()),
            Arc::new(NullSyncNotifier),
        ));
        PlanningService::new(Arc::new(LocalPlanningRepository::new(store)), None)
    }

    #[tokio::test]
    async fn missing_plans_read_as_empty() {
        let service = service();
        let plan = service.monthly("2026-04").await.unwrap();
        assert!(plan.goals.is_empty());
        assert!(plan.notes.is_empty());
    }

    #[tokio::test]
    async fn upserts_overwrite_per_key() {
        let service = service();
        service
            .save_weekly(
                "2026-14",
                WeeklyPlan {
                    goals: vec!["ship".into()],
                    tasks: vec![],
                    notes: "v1".into(),
                },
            )
            .await
            .unwrap();
        service
            .save_weekly(
                "2026-14",
                WeeklyPlan {
                    goals: vec!["ship".into()],
                    tasks: vec!["test".into()],
                    notes: "v2".into(),
                },
            )
            .await
            .unwrap();

        let plan = service.weekly("2026-14").await.unwrap();
        assert_eq!(plan.notes, "v2");
        assert_eq!(plan.tasks, vec!["test"]);
        // A different key stays independent.
        assert!(service.weekly("2026-15").await.unwrap().notes.is_empty());
    }

    #[tokio::test]
    async fn list_monthly_returns_newest_first() {
        let service = service();
        service
            .save_monthly("2026-03", MonthlyPlan::default())
            .await
            .unwrap();
        service
            .save_monthly("2026-05", MonthlyPlan::default())
            .await
            .unwrap();

        let records = service.list_monthly().await.unwrap();
        let keys: Vec<_> = records.iter().map(|r| r.month_key.as_str()).collect();
        assert_eq!(keys, vec!["2026-05", "2026-03"]);
    }
}
