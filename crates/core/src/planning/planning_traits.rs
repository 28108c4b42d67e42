use async_trait::async_trait;

use crate::errors::Result;
use crate::planning::{DailyPlan, MonthlyPlan, MonthlyPlanRecord, WeeklyPlan};

/// Trait for planning repository operations. All writes are upserts keyed
/// by the partition key; later writes overwrite earlier ones.
#[async_trait]
pub trait PlanningRepositoryTrait: Send + Sync {
    async fn get_monthly(&self, month_key: &str) -> Result<Option<MonthlyPlan>>;
    async fn upsert_monthly(&self, month_key: &str, plan: MonthlyPlan) -> Result<()>;

    async fn get_weekly(&self, week_key: &str) -> Result<Option<WeeklyPlan>>;
    async fn upsert_weekly(&self, week_key: &str, plan: WeeklyPlan) -> Result<()>;

    async fn get_daily(&self, date_key: &str) -> Result<Option<DailyPlan>>;
    async fn upsert_daily(&self, date_key: &str, plan: DailyPlan) -> Result<()>;

    /// All monthly plans, newest month first.
    async fn list_monthly(&self) -> Result<Vec<MonthlyPlanRecord>>;
}
