//! Daily log domain models.
//!
//! One logical record exists per `(date, item)` pair; later writes replace
//! earlier ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::Zone;

/// Completion state of a timetable task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Complete,
    Skipped,
}

impl TaskStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            TaskStatus::Complete => "complete",
            TaskStatus::Skipped => "skipped",
        }
    }

    pub fn from_db_str(raw: &str) -> Option<Self> {
        match raw {
            "complete" => Some(TaskStatus::Complete),
            "skipped" => Some(TaskStatus::Skipped),
            _ => None,
        }
    }
}

/// Outcome of a protocol checklist item. `Na` marks items waived by the
/// day's template (recorded automatically on Sundays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolStatus {
    Passed,
    Failed,
    Na,
}

impl ProtocolStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ProtocolStatus::Passed => "passed",
            ProtocolStatus::Failed => "failed",
            ProtocolStatus::Na => "na",
        }
    }

    pub fn from_db_str(raw: &str) -> Option<Self> {
        match raw {
            "passed" => Some(ProtocolStatus::Passed),
            "failed" => Some(ProtocolStatus::Failed),
            "na" => Some(ProtocolStatus::Na),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimetableLogEntry {
    pub status: TaskStatus,
    pub zone: Zone,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolLogEntry {
    pub status: ProtocolStatus,
    pub zone: Zone,
    #[serde(default)]
    pub auto: bool,
    pub timestamp: String,
}

/// One day's logs, keyed by task/item id.
pub type DayLogs<T> = BTreeMap<String, T>;

/// A date range of logs, keyed by date key. Every requested day is present,
/// empty when nothing was logged.
pub type RangeLogs<T> = BTreeMap<String, DayLogs<T>>;
