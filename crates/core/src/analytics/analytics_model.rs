//! Analytics domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{DayType, Zone};

/// One day of derived metrics. `completion_percent` is an integer in
/// [0, 100]; a day with no required tasks scores zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRow {
    pub date_key: String,
    pub zone: Zone,
    pub day_type: DayType,
    pub completion_percent: i64,
    pub complete_count: usize,
    pub total_tasks: usize,
    pub protocol_pass: usize,
    pub protocol_fail: usize,
    pub connections: i64,
}

/// Best streak is scanned forward over the whole range; current streak
/// backward from the range end. Both count consecutive 100% days.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    pub current_streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week: String,
    pub avg_completion: i64,
    pub total_connections: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub avg_completion: i64,
    pub protocol_pass_rate: i64,
}

/// One brand-day revenue entry within the requested range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandRevenuePoint {
    pub date_key: String,
    pub brand: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandRevenueTotal {
    pub brand: String,
    pub total: Decimal,
}

/// Everything the dashboard derives from one date range. Recomputed from
/// the stored logs on every request; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub daily: Vec<DailyRow>,
    pub best_day: Option<DailyRow>,
    pub average_completion: i64,
    pub streaks: StreakInfo,
    pub weekly: Vec<WeeklySummary>,
    pub monthly: Vec<MonthlySummary>,
    pub revenue_daily: Vec<BrandRevenuePoint>,
    pub revenue_monthly: Vec<BrandRevenueTotal>,
}

impl AnalyticsReport {
    pub fn empty() -> Self {
        AnalyticsReport {
            daily: Vec::new(),
            best_day: None,
            average_completion: 0,
            streaks: StreakInfo::default(),
            weekly: Vec::new(),
            monthly: Vec::new(),
            revenue_daily: Vec::new(),
            revenue_monthly: Vec::new(),
        }
    }
}
