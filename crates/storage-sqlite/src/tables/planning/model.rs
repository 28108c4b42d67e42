//! Database models for the planning tables. Goal and task lists are stored
//! as JSON arrays of strings.

use diesel::prelude::*;
use lifeplan_core::planning::{DailyPlan, MonthlyPlan, WeeklyPlan};

fn parse_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn to_list(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".into())
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::planning_monthly)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlyPlanDB {
    pub month_key: String,
    pub goals: String,
    pub notes: String,
    pub created_at: Option<String>,
}

impl MonthlyPlanDB {
    pub fn from_plan(month_key: &str, plan: MonthlyPlan, created_at: String) -> Self {
        MonthlyPlanDB {
            month_key: month_key.to_string(),
            goals: to_list(&plan.goals),
            notes: plan.notes,
            created_at: Some(created_at),
        }
    }

    pub fn into_plan(self) -> MonthlyPlan {
        MonthlyPlan {
            goals: parse_list(&self.goals),
            notes: self.notes,
        }
    }
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::planning_weekly)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WeeklyPlanDB {
    pub week_key: String,
    pub goals: String,
    pub tasks: String,
    pub notes: String,
    pub created_at: Option<String>,
}

impl WeeklyPlanDB {
    pub fn from_plan(week_key: &str, plan: WeeklyPlan, created_at: String) -> Self {
        WeeklyPlanDB {
            week_key: week_key.to_string(),
            goals: to_list(&plan.goals),
            tasks: to_list(&plan.tasks),
            notes: plan.notes,
            created_at: Some(created_at),
        }
    }

    pub fn into_plan(self) -> WeeklyPlan {
        WeeklyPlan {
            goals: parse_list(&self.goals),
            tasks: parse_list(&self.tasks),
            notes: self.notes,
        }
    }
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::planning_daily)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyPlanDB {
    pub date: String,
    pub goals: String,
    pub notes: String,
    pub created_at: Option<String>,
}

impl DailyPlanDB {
    pub fn from_plan(date: &str, plan: DailyPlan, created_at: String) -> Self {
        DailyPlanDB {
            date: date.to_string(),
            goals: to_list(&plan.goals),
            notes: plan.notes,
            created_at: Some(created_at),
        }
    }

    pub fn into_plan(self) -> DailyPlan {
        DailyPlan {
            goals: parse_list(&self.goals),
            notes: self.notes,
        }
    }
}
