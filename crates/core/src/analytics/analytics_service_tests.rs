//! Tests for the analytics rollups.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::analytics::analytics_service::{
    average_completion, best_day, build_daily_rows, monthly_summary, revenue_daily, streaks,
    weekly_summary,
};
use crate::analytics::{AnalyticsService, DailyRow};
use crate::brands::{BrandService, LiveBrand, LocalBrandRepository};
use crate::calendar::{date_key, date_range, DayType, Zone};
use crate::connections::{ConnectionService, LocalConnectionRepository};
use crate::store::{LocalStore, MemoryLocalStore, NullSyncNotifier};
use crate::tracking::{
    LocalTrackingRepository, ProtocolStatus, RangeLogs, TaskStatus, TrackingService,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn row(date_key: &str, completion: i64) -> DailyRow {
    DailyRow {
        date_key: date_key.to_string(),
        zone: Zone::Working,
        day_type: DayType::Normal,
        completion_percent: completion,
        complete_count: 0,
        total_tasks: 10,
        protocol_pass: 0,
        protocol_fail: 0,
        connections: 0,
    }
}

#[test]
fn completion_percent_stays_in_bounds() {
    // 2026-04-06 is a working-zone Monday: 19 required tasks.
    let dates = vec![d(2026, 4, 6)];
    let rows = build_daily_rows(&dates, &RangeLogs::new(), &RangeLogs::new(), &BTreeMap::new());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].completion_percent, 0);
    assert_eq!(rows[0].total_tasks, 19);
    assert!((0..=100).contains(&rows[0].completion_percent));
}

#[tokio::test]
async fn full_day_scores_one_hundred() {
    let store = Arc::new(LocalStore::new(
        Arc::new(MemoryLocalStore::new()),
        Arc::new(NullSyncNotifier),
    ));
    let tracking = TrackingService::new(
        Arc::new(LocalTrackingRepository::new(Arc::clone(&store))),
        None,
    );

    // Complete every required task of a working Monday.
    let date = d(2026, 4, 6);
    let key = date_key(date);
    for task in crate::templates::required_tasks(crate::templates::timetable_for_date(date)) {
        tracking
            .mark_task(&key, task.id, TaskStatus::Complete, Zone::Working)
            .await
            .unwrap();
    }
    tracking
        .mark_protocol(&key, "no_sugar", ProtocolStatus::Passed, Zone::Working)
        .await
        .unwrap();
    tracking
        .mark_protocol(&key, "no_fap", ProtocolStatus::Failed, Zone::Working)
        .await
        .unwrap();

    let keys = vec![key.clone()];
    let timetable = tracking.timetable_range(&keys).await.unwrap();
    let protocol = tracking.protocol_range(&keys).await.unwrap();
    let rows = build_daily_rows(&[date], &timetable, &protocol, &BTreeMap::new());

    assert_eq!(rows[0].completion_percent, 100);
    assert_eq!(rows[0].protocol_pass, 1);
    assert_eq!(rows[0].protocol_fail, 1);
}

#[test]
fn best_day_resolves_ties_to_the_first_occurrence() {
    let rows = vec![row("2026-04-01", 80), row("2026-04-02", 90), row("2026-04-03", 90)];
    assert_eq!(best_day(&rows).unwrap().date_key, "2026-04-02");
    assert!(best_day(&[]).is_none());
}

#[test]
fn streaks_scan_forward_for_best_and_backward_for_current() {
    let rows = vec![
        row("2026-04-01", 100),
        row("2026-04-02", 100),
        row("2026-04-03", 100),
        row("2026-04-04", 50),
        row("2026-04-05", 100),
        row("2026-04-06", 100),
    ];
    let info = streaks(&rows);
    assert_eq!(info.best_streak, 3);
    assert_eq!(info.current_streak, 2);
    assert!(info.best_streak >= info.current_streak);
}

#[test]
fn streaks_are_zero_without_a_perfect_day() {
    let rows = vec![row("2026-04-01", 99), row("2026-04-02", 0)];
    let info = streaks(&rows);
    assert_eq!(info.best_streak, 0);
    assert_eq!(info.current_streak, 0);
}

#[test]
fn average_rounds_to_an_integer() {
    let rows = vec![row("2026-04-01", 50), row("2026-04-02", 51)];
    assert_eq!(average_completion(&rows), 51);
    assert_eq!(average_completion(&[]), 0);
}

#[test]
fn weekly_and_monthly_grouping_by_calendar_key() {
    let mut rows = vec![
        row("2026-03-31", 100),
        row("2026-04-01", 50),
        row("2026-04-02", 100),
    ];
    rows[0].connections = 2;
    rows[1].connections = 1;
    rows[2].protocol_pass = 3;
    rows[2].protocol_fail = 1;

    // All three days fall in ISO week 2026-14.
    let weekly = weekly_summary(&rows);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].week, "2026-14");
    assert_eq!(weekly[0].avg_completion, 83);
    assert_eq!(weekly[0].total_connections, 3);

    let monthly = monthly_summary(&rows);
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2026-03");
    assert_eq!(monthly[1].month, "2026-04");
    assert_eq!(monthly[1].avg_completion, 75);
    assert_eq!(monthly[1].protocol_pass_rate, 75);
    // No protocol data at all reads as a zero rate, not a division error.
    assert_eq!(monthly[0].protocol_pass_rate, 0);
}

#[test]
fn revenue_daily_filters_to_the_range_and_keeps_zero_amounts() {
    let brand = LiveBrand {
        id: "b1".into(),
        name: "Zen".into(),
        start_date: "2026-03-01".into(),
        revenue_log: BTreeMap::from([
            ("2026-03-30".to_string(), Decimal::from(10)),
            ("2026-04-01".to_string(), Decimal::ZERO),
            ("2026-04-02".to_string(), Decimal::from(25)),
        ]),
        status: "active".into(),
        phase: None,
        source: None,
        created_at: String::new(),
    };

    let points = revenue_daily(&[brand], d(2026, 4, 1), d(2026, 4, 30));
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date_key, "2026-04-01");
    assert_eq!(points[0].amount, Decimal::ZERO);
}

#[tokio::test]
async fn inverted_range_yields_the_empty_report() {
    let store = Arc::new(LocalStore::new(
        Arc::new(MemoryLocalStore::new()),
        Arc::new(NullSyncNotifier),
    ));
    let service = AnalyticsService::new(
        Arc::new(TrackingService::new(
            Arc::new(LocalTrackingRepository::new(Arc::clone(&store))),
            None,
        )),
        Arc::new(ConnectionService::new(
            Arc::new(LocalConnectionRepository::new(Arc::clone(&store))),
            None,
        )),
        Arc::new(BrandService::new(
            Arc::new(LocalBrandRepository::new(store)),
            None,
        )),
    );

    let report = service.report(d(2026, 4, 10), d(2026, 4, 1)).await.unwrap();
    assert!(report.daily.is_empty());
    assert!(report.best_day.is_none());
    assert_eq!(report.streaks.best_streak, 0);

    // A valid range produces one row per day.
    let report = service.report(d(2026, 4, 1), d(2026, 4, 3)).await.unwrap();
    assert_eq!(report.daily.len(), 3);
    assert_eq!(date_range(d(2026, 4, 1), d(2026, 4, 3)).len(), 3);
}
