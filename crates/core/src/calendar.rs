//! Calendar derivations: zones, day types, and partition keys.
//!
//! Zones and day types are pure functions of the calendar date and are never
//! persisted; they select which static timetable/protocol template applies
//! on a given day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 15-day recurring mode derived from the day of month: days 1-15 are
/// WORKING, the rest of the month is NOMAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Working,
    Nomad,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Working => "WORKING",
            Zone::Nomad => "NOMAD",
        }
    }

    pub fn from_db_str(raw: &str) -> Option<Self> {
        match raw {
            "WORKING" => Some(Zone::Working),
            "NOMAD" => Some(Zone::Nomad),
            _ => None,
        }
    }
}

/// Weekday-derived template selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    Normal,
    Wednesday,
    Sunday,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Normal => "NORMAL",
            DayType::Wednesday => "WEDNESDAY",
            DayType::Sunday => "SUNDAY",
        }
    }
}

pub fn zone_for(date: NaiveDate) -> Zone {
    if date.day() <= 15 {
        Zone::Working
    } else {
        Zone::Nomad
    }
}

pub fn day_type_for(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sun => DayType::Sunday,
        Weekday::Wed => DayType::Wednesday,
        _ => DayType::Normal,
    }
}

/// Days left before the zone flips (at day 16, and at the month boundary).
pub fn days_remaining_in_zone(date: NaiveDate) -> u32 {
    let day = date.day();
    if day <= 15 {
        15 - day
    } else {
        last_day_of_month(date) - day
    }
}

fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // First of next month minus one day is always valid.
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| (first - Duration::days(1)).day())
        .unwrap_or(28)
}

/// Sortable calendar-day key, `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Calendar-month key, `YYYY-MM`.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// ISO-week key, `IYYY-WW` (ISO week-year plus zero-padded week number).
pub fn week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-{:02}", week.year(), week.week())
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// All calendar days from `start` through `end` inclusive. An inverted
/// range yields an empty list.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        days.push(cursor);
        cursor += Duration::days(1);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn zone_flips_after_the_fifteenth() {
        assert_eq!(zone_for(d(2026, 3, 1)), Zone::Working);
        assert_eq!(zone_for(d(2026, 3, 15)), Zone::Working);
        assert_eq!(zone_for(d(2026, 3, 16)), Zone::Nomad);
        assert_eq!(zone_for(d(2026, 3, 31)), Zone::Nomad);
    }

    #[test]
    fn days_remaining_counts_to_the_boundary() {
        assert_eq!(days_remaining_in_zone(d(2026, 3, 10)), 5);
        assert_eq!(days_remaining_in_zone(d(2026, 3, 15)), 0);
        assert_eq!(days_remaining_in_zone(d(2026, 3, 16)), 15);
        assert_eq!(days_remaining_in_zone(d(2026, 2, 20)), 8);
    }

    #[test]
    fn day_type_from_weekday() {
        // 2026-03-01 is a Sunday, 2026-03-04 a Wednesday.
        assert_eq!(day_type_for(d(2026, 3, 1)), DayType::Sunday);
        assert_eq!(day_type_for(d(2026, 3, 4)), DayType::Wednesday);
        assert_eq!(day_type_for(d(2026, 3, 5)), DayType::Normal);
    }

    #[test]
    fn keys_are_sortable_text() {
        assert_eq!(date_key(d(2026, 3, 4)), "2026-03-04");
        assert_eq!(month_key(d(2026, 3, 4)), "2026-03");
        // ISO week 1 of 2026 starts on 2025-12-29.
        assert_eq!(week_key(d(2025, 12, 29)), "2026-01");
    }

    #[test]
    fn date_range_is_inclusive_and_rejects_inverted_input() {
        let days = date_range(d(2026, 3, 1), d(2026, 3, 3));
        assert_eq!(days.len(), 3);
        assert_eq!(days[0], d(2026, 3, 1));
        assert_eq!(days[2], d(2026, 3, 3));

        assert!(date_range(d(2026, 3, 3), d(2026, 3, 1)).is_empty());
        assert_eq!(date_range(d(2026, 3, 3), d(2026, 3, 3)).len(), 1);
    }

    #[test]
    fn parse_date_key_round_trips() {
        let date = d(2026, 11, 30);
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
        assert_eq!(parse_date_key("not-a-date"), None);
    }
}
