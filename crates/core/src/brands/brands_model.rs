//! Brand domain models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A brand waiting in the pipeline. `sort_order` carries the explicit
/// display order; reordering swaps the values of two adjacent rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineBrand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub planned_start_date: String,
    #[serde(default)]
    pub source_idea: String,
    pub sort_order: i32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPipelineBrand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub planned_start_date: String,
    #[serde(default)]
    pub source_idea: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineBrandUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_idea: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

impl PipelineBrand {
    pub fn apply(&mut self, update: PipelineBrandUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(planned_start_date) = update.planned_start_date {
            self.planned_start_date = planned_start_date;
        }
        if let Some(source_idea) = update.source_idea {
            self.source_idea = source_idea;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    Up,
    Down,
}

/// One checkable entry of a phase checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseOne {
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTwo {
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub tasks: Vec<ChecklistItem>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseThree {
    #[serde(default)]
    pub launch_date: String,
    #[serde(default)]
    pub distribution_channels: String,
    #[serde(default)]
    pub people_assigned: String,
    #[serde(default)]
    pub expected_monthly_revenue: String,
    #[serde(default)]
    pub recheck_date: String,
    #[serde(default)]
    pub expected_outcome: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseData {
    #[serde(default)]
    pub phase1: PhaseOne,
    #[serde(default)]
    pub phase2: PhaseTwo,
    #[serde(default)]
    pub phase3: PhaseThree,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    pub text: String,
    pub timestamp: String,
}

/// The singleton brand being actively built. At most one exists; clearing
/// it (via automation) spawns an equivalent [`LiveBrand`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBrand {
    pub name: String,
    pub phase: u8,
    #[serde(default)]
    pub phase_data: PhaseData,
    #[serde(default)]
    pub daily_logs: BTreeMap<String, DailyLogEntry>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub planned_start_date: String,
    #[serde(default)]
    pub source_idea: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrentBrand {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBrandUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_data: Option<PhaseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl CurrentBrand {
    pub fn from_pipeline(brand: &PipelineBrand, start_date: String) -> Self {
        CurrentBrand {
            name: brand.name.clone(),
            phase: 1,
            phase_data: PhaseData::default(),
            daily_logs: BTreeMap::new(),
            start_date,
            category: brand.category.clone(),
            description: brand.description.clone(),
            planned_start_date: brand.planned_start_date.clone(),
            source_idea: brand.source_idea.clone(),
            updated_at: None,
        }
    }

    pub fn apply(&mut self, update: CurrentBrandUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phase) = update.phase {
            self.phase = phase;
        }
        if let Some(phase_data) = update.phase_data {
            self.phase_data = phase_data;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
    }
}

/// A launched, revenue-tracked brand. The revenue log is keyed by date; an
/// explicit zero amount is a recorded fact, distinct from a missing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveBrand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub revenue_log: BTreeMap<String, Decimal>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub phase: Option<i32>,
    #[serde(default)]
    pub source: Option<String>,
    pub created_at: String,
}

fn default_status() -> String {
    "active".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLiveBrand {
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
}

impl LiveBrand {
    /// Sum of all logged revenue.
    pub fn total_revenue(&self) -> Decimal {
        self.revenue_log.values().copied().sum()
    }

    /// Sum of revenue logged under dates of the given month key.
    pub fn revenue_for_month(&self, month_key: &str) -> Decimal {
        self.revenue_log
            .iter()
            .filter(|(date_key, _)| date_key.starts_with(month_key))
            .map(|(_, amount)| *amount)
            .sum()
    }
}

/// Terminal record for a closed brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedBrand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub closed_date: String,
    pub total_revenue: Decimal,
    #[serde(default)]
    pub summary: String,
    pub created_at: String,
}
