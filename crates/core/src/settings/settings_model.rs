//! Settings domain models.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_DREAM_VERSION: &str =
    "Build an unstoppable body, mind, and business machine.";

/// Singleton settings document. `countdown_start_date` defaults to the day
/// the settings are first read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub dream_version_description: String,
    #[serde(default)]
    pub countdown_start_date: String,
    #[serde(default)]
    pub last_visit_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Settings {
    pub fn defaults_for(today_key: &str) -> Self {
        Settings {
            dream_version_description: DEFAULT_DREAM_VERSION.to_string(),
            countdown_start_date: today_key.to_string(),
            last_visit_date: None,
            updated_at: None,
        }
    }

    /// Fills blank fields from the defaults without touching set ones.
    pub fn merged_with_defaults(mut self, today_key: &str) -> Self {
        if self.dream_version_description.is_empty() {
            self.dream_version_description = DEFAULT_DREAM_VERSION.to_string();
        }
        if self.countdown_start_date.is_empty() {
            self.countdown_start_date = today_key.to_string();
        }
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dream_version_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_start_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::utils::double_option"
    )]
    pub last_visit_date: Option<Option<String>>,
}

impl Settings {
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(description) = update.dream_version_description {
            self.dream_version_description = description;
        }
        if let Some(start) = update.countdown_start_date {
            self.countdown_start_date = start;
        }
        if let Some(last_visit) = update.last_visit_date {
            self.last_visit_date = last_visit;
        }
    }
}
