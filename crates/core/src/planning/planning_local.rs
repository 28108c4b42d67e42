//! Key-value backed planning repository (local fallback mode).
//!
//! Each horizon stores a map from partition key to plan under a single
//! namespaced key.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::FALLBACK_PREFIX;
use crate::errors::Result;
use crate::planning::{
    DailyPlan, MonthlyPlan, MonthlyPlanRecord, PlanningRepositoryTrait, WeeklyPlan,
};
use crate::store::LocalStore;

fn monthly_key() -> String {
    format!("{}:planning:monthly", FALLBACK_PREFIX)
}

fn weekly_key() -> String {
    format!("{}:planning:weekly", FALLBACK_PREFIX)
}

fn daily_key() -> String {
    format!("{}:planning:daily", FALLBACK_PREFIX)
}

pub struct LocalPlanningRepository {
    store: Arc<LocalStore>,
}

impl LocalPlanningRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        LocalPlanningRepository { store }
    }
}

#[async_trait]
impl PlanningRepositoryTrait for LocalPlanningRepository {
    async fn get_monthly(&self, month_key: &str) -> Result<Option<MonthlyPlan>> {
        let map: BTreeMap<String, MonthlyPlan> = self.store.read(&monthly_key(), BTreeMap::new());
        Ok(map.get(month_key).cloned())
    }

    async fn upsert_monthly(&self, month_key: &str, plan: MonthlyPlan) -> Result<()> {
        let mut map: BTreeMap<String, MonthlyPlan> =
            self.store.read(&monthly_key(), BTreeMap::new());
        map.insert(month_key.to_string(), plan);
        self.store.write(&monthly_key(), &map).await
    }

    async fn get_weekly(&self, week_key: &str) -> Result<Option<WeeklyPlan>> {
        let map: BTreeMap<String, WeeklyPlan> = self.store.read(&weekly_key(), BTreeMap::new());
        Ok(map.get(week_key).cloned())
    }

    async fn upsert_weekly(&self, week_key: &str, plan: WeeklyPlan) -> Result<()> {
        let mut map: BTreeMap<String, WeeklyPlan> = self.store.read(&weekly_key(), BTreeMap::new());
        map.insert(week_key.to_string(), plan);
        self.store.write(&weekly_key(), &map).await
    }

    async fn get_daily(&self, date_key: &str) -> Result<Option<DailyPlan>> {
        let map: BTreeMap<String, DailyPlan> = self.store.read(&daily_key(), BTreeMap::new());
        Ok(map.get(date_key).cloned())
    }

    async fn upsert_daily(&self, date_key: &str, plan: DailyPlan) -> Result<()> {
        let mut map: BTreeMap<String, DailyPlan> = self.store.read(&daily_key(), BTreeMap::new());
        map.insert(date_key.to_string(), plan);
        self.store.write(&daily_key(), &map).await
    }

    async fn list_monthly(&self) -> Result<Vec<MonthlyPlanRecord>> {
        let map: BTreeMap<String, MonthlyPlan> = self.store.read(&monthly_key(), BTreeMap::new());
        Ok(map
            .into_iter()
            .rev()
            .map(|(month_key, plan)| MonthlyPlanRecord {
                month_key,
                plan,
                created_at: None,
            })
            .collect())
    }
}
