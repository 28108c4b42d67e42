//! Connection-count domain model.

use serde::{Deserialize, Serialize};

/// One day's recorded connection count; keyed by date, last write wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionLog {
    pub count: i64,
    #[serde(default)]
    pub updated_at: Option<String>,
}
