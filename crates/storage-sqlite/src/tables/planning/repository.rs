use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use lifeplan_core::errors::Result;
use lifeplan_core::planning::{
    DailyPlan, MonthlyPlan, MonthlyPlanRecord, PlanningRepositoryTrait, WeeklyPlan,
};

use super::model::{DailyPlanDB, MonthlyPlanDB, WeeklyPlanDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{planning_daily, planning_monthly, planning_weekly};

pub struct PlanningRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PlanningRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PlanningRepository { pool, writer }
    }
}

#[async_trait]
impl PlanningRepositoryTrait for PlanningRepository {
    async fn get_monthly(&self, month_key: &str) -> Result<Option<MonthlyPlan>> {
        let mut conn = get_connection(&self.pool)?;
        let row = planning_monthly::table
            .find(month_key)
            .first::<MonthlyPlanDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(MonthlyPlanDB::into_plan))
    }

    async fn upsert_monthly(&self, month_key: &str, plan: MonthlyPlan) -> Result<()> {
        let row = MonthlyPlanDB::from_plan(month_key, plan, Utc::now().to_rfc3339());
        self.writer
            .exec(move |conn| {
                diesel::replace_into(planning_monthly::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn get_weekly(&self, week_key: &str) -> Result<Option<WeeklyPlan>> {
        let mut conn = get_connection(&self.pool)?;
        let row = planning_weekly::table
            .find(week_key)
            .first::<WeeklyPlanDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(WeeklyPlanDB::into_plan))
    }

    async fn upsert_weekly(&self, week_key: &str, plan: WeeklyPlan) -> Result<()> {
        let row = WeeklyPlanDB::from_plan(week_key, plan, Utc::now().to_rfc3339());
        self.writer
            .exec(move |conn| {
                diesel::replace_into(planning_weekly::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn get_daily(&self, date_key: &str) -> Result<Option<DailyPlan>> {
        let mut conn = get_connection(&self.pool)?;
        let row = planning_daily::table
            .find(date_key)
            .first::<DailyPlanDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(DailyPlanDB::into_plan))
    }

    async fn upsert_daily(&self, date_key: &str, plan: DailyPlan) -> Result<()> {
        let row = DailyPlanDB::from_plan(date_key, plan, Utc::now().to_rfc3339());
        self.writer
            .exec(move |conn| {
                diesel::replace_into(planning_daily::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn list_monthly(&self) -> Result<Vec<MonthlyPlanRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = planning_monthly::table
            .order(planning_monthly::month_key.desc())
            .load::<MonthlyPlanDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|row| MonthlyPlanRecord {
                month_key: row.month_key.clone(),
                created_at: row.created_at.clone(),
                plan: row.into_plan(),
            })
            .collect())
    }
}
