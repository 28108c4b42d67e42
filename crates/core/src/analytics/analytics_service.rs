//! Analytics aggregation service.
//!
//! Fetches the range's logs in batches through the domain services, then
//! reduces them with the pure functions below. No aggregate state is
//! cached; every range change recomputes from the stored logs.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::try_join;
use rust_decimal::Decimal;

use crate::analytics::{
    AnalyticsReport, BrandRevenuePoint, BrandRevenueTotal, DailyRow, MonthlySummary, StreakInfo,
    WeeklySummary,
};
use crate::brands::BrandService;
use crate::calendar::{date_key, date_range, day_type_for, parse_date_key, week_key, zone_for};
use crate::connections::{ConnectionLog, ConnectionService};
use crate::errors::Result;
use crate::templates::{protocol_items, required_tasks, timetable_for_date};
use crate::tracking::{ProtocolLogEntry, ProtocolStatus, RangeLogs, TaskStatus, TimetableLogEntry, TrackingService};

pub struct AnalyticsService {
    tracking: Arc<TrackingService>,
    connections: Arc<ConnectionService>,
    brands: Arc<BrandService>,
}

impl AnalyticsService {
    pub fn new(
        tracking: Arc<TrackingService>,
        connections: Arc<ConnectionService>,
        brands: Arc<BrandService>,
    ) -> Self {
        AnalyticsService {
            tracking,
            connections,
            brands,
        }
    }

    /// Derived metrics for the inclusive range. An inverted range yields
    /// the empty report.
    pub async fn report(&self, start: NaiveDate, end: NaiveDate) -> Result<AnalyticsReport> {
        let dates = date_range(start, end);
        if dates.is_empty() {
            return Ok(AnalyticsReport::empty());
        }
        let date_keys: Vec<String> = dates.iter().copied().map(date_key).collect();

        let (timetable, protocol, connections, live_brands) = try_join!(
            self.tracking.timetable_range(&date_keys),
            self.tracking.protocol_range(&date_keys),
            self.connections.range(&date_keys),
            self.brands.live(),
        )?;

        let daily = build_daily_rows(&dates, &timetable, &protocol, &connections);
        let revenue_daily = revenue_daily(&live_brands, start, end);
        let revenue_monthly = revenue_monthly(&live_brands);

        Ok(AnalyticsReport {
            best_day: best_day(&daily).cloned(),
            average_completion: average_completion(&daily),
            streaks: streaks(&daily),
            weekly: weekly_summary(&daily),
            monthly: monthly_summary(&daily),
            revenue_daily,
            revenue_monthly,
            daily,
        })
    }
}

fn percent(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i64
}

pub(crate) fn build_daily_rows(
    dates: &[NaiveDate],
    timetable: &RangeLogs<TimetableLogEntry>,
    protocol: &RangeLogs<ProtocolLogEntry>,
    connections: &BTreeMap<String, ConnectionLog>,
) -> Vec<DailyRow> {
    dates
        .iter()
        .map(|&date| {
            let key = date_key(date);
            let zone = zone_for(date);
            let day_type = day_type_for(date);

            let expected = required_tasks(timetable_for_date(date));
            let task_logs = timetable.get(&key);
            let complete_count = expected
                .iter()
                .filter(|task| {
                    task_logs
                        .and_then(|logs| logs.get(task.id))
                        .is_some_and(|entry| entry.status == TaskStatus::Complete)
                })
                .count();

            let items = protocol_items(zone, day_type);
            let protocol_logs = protocol.get(&key);
            let status_count = |status: ProtocolStatus| {
                items
                    .iter()
                    .filter(|item| {
                        protocol_logs
                            .and_then(|logs| logs.get(item.id))
                            .is_some_and(|entry| entry.status == status)
                    })
                    .count()
            };

            DailyRow {
                zone,
                day_type,
                completion_percent: percent(complete_count, expected.len()),
                complete_count,
                total_tasks: expected.len(),
                protocol_pass: status_count(ProtocolStatus::Passed),
                protocol_fail: status_count(ProtocolStatus::Failed),
                connections: connections.get(&key).map(|log| log.count).unwrap_or(0),
                date_key: key,
            }
        })
        .collect()
}

/// Highest completion percentage; ties resolve to the earliest day.
pub(crate) fn best_day(rows: &[DailyRow]) -> Option<&DailyRow> {
    rows.iter().reduce(|best, row| {
        if row.completion_percent > best.completion_percent {
            row
        } else {
            best
        }
    })
}

pub(crate) fn average_completion(rows: &[DailyRow]) -> i64 {
    if rows.is_empty() {
        return 0;
    }
    let sum: i64 = rows.iter().map(|row| row.completion_percent).sum();
    (sum as f64 / rows.len() as f64).round() as i64
}

pub(crate) fn streaks(rows: &[DailyRow]) -> StreakInfo {
    let mut best = 0u32;
    let mut running = 0u32;
    for row in rows {
        if row.completion_percent == 100 {
            running += 1;
            best = best.max(running);
        } else {
            running = 0;
        }
    }

    let current = rows
        .iter()
        .rev()
        .take_while(|row| row.completion_percent == 100)
        .count() as u32;

    StreakInfo {
        current_streak: current,
        best_streak: best,
    }
}

pub(crate) fn weekly_summary(rows: &[DailyRow]) -> Vec<WeeklySummary> {
    group_by(rows, |row| {
        parse_date_key(&row.date_key).map(week_key).unwrap_or_default()
    })
    .into_iter()
    .map(|(week, rows)| WeeklySummary {
        week,
        avg_completion: average_completion(&rows),
        total_connections: rows.iter().map(|row| row.connections).sum(),
    })
    .collect()
}

pub(crate) fn monthly_summary(rows: &[DailyRow]) -> Vec<MonthlySummary> {
    group_by(rows, |row| row.date_key[..7.min(row.date_key.len())].to_string())
        .into_iter()
        .map(|(month, rows)| {
            let pass: usize = rows.iter().map(|row| row.protocol_pass).sum();
            let fail: usize = rows.iter().map(|row| row.protocol_fail).sum();
            MonthlySummary {
                month,
                avg_completion: average_completion(&rows),
                protocol_pass_rate: percent(pass, pass + fail),
            }
        })
        .collect()
}

fn group_by<K: Ord, F: Fn(&DailyRow) -> K>(rows: &[DailyRow], key: F) -> BTreeMap<K, Vec<DailyRow>> {
    let mut grouped: BTreeMap<K, Vec<DailyRow>> = BTreeMap::new();
    for row in rows {
        grouped.entry(key(row)).or_default().push(row.clone());
    }
    grouped
}

pub(crate) fn revenue_daily(
    brands: &[crate::brands::LiveBrand],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<BrandRevenuePoint> {
    let mut points: Vec<BrandRevenuePoint> = brands
        .iter()
        .flat_map(|brand| {
            brand.revenue_log.iter().filter_map(|(key, amount)| {
                let date = parse_date_key(key)?;
                (date >= start && date <= end).then(|| BrandRevenuePoint {
                    date_key: key.clone(),
                    brand: brand.name.clone(),
                    amount: *amount,
                })
            })
        })
        .collect();
    points.sort_by(|a, b| (&a.date_key, &a.brand).cmp(&(&b.date_key, &b.brand)));
    points
}

pub(crate) fn revenue_monthly(brands: &[crate::brands::LiveBrand]) -> Vec<BrandRevenueTotal> {
    brands
        .iter()
        .map(|brand| BrandRevenueTotal {
            brand: brand.name.clone(),
            total: brand.revenue_log.values().copied().sum::<Decimal>(),
        })
        .collect()
}
