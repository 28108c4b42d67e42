//! Planning domain models, keyed by month/week/date partition keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPlan {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// A listed monthly plan together with its partition key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPlanRecord {
    pub month_key: String,
    #[serde(flatten)]
    pub plan: MonthlyPlan,
    #[serde(default)]
    pub created_at: Option<String>,
}
