//! Analytics module - derived rollups over the daily logs.

mod analytics_model;
mod analytics_service;
#[cfg(test)]
mod analytics_service_tests;

pub use analytics_model::{
    AnalyticsReport, BrandRevenuePoint, BrandRevenueTotal, DailyRow, MonthlySummary, StreakInfo,
    WeeklySummary,
};
pub use analytics_service::AnalyticsService;
