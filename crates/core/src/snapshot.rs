//! The cloud-synced state snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::KEY_PREFIX;

/// The full namespaced key/value set representing one user's state.
///
/// Values are the raw serialized JSON strings as stored in the local
/// key-value store; the snapshot layer never interprets them. Only keys
/// under [`KEY_PREFIX`] participate in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    pub entries: BTreeMap<String, String>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trackable_key(key: &str) -> bool {
        key.starts_with(KEY_PREFIX)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry outside the sync namespace. Applied on both ends
    /// so a foreign key can never ride along in a push or a pull.
    pub fn retain_trackable(&mut self) {
        self.entries.retain(|key, _| Self::is_trackable_key(key));
    }
}

impl FromIterator<(String, String)> for StateSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_trackable_drops_foreign_keys() {
        let mut snapshot = StateSnapshot::new();
        snapshot.insert("lifeplan:fallback:ideas", "[]");
        snapshot.insert("lifeplan:settings", "{}");
        snapshot.insert("other-app:state", "{}");

        snapshot.retain_trackable();

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.get("other-app:state").is_none());
        assert_eq!(snapshot.get("lifeplan:fallback:ideas"), Some("[]"));
    }

    #[test]
    fn serializes_as_a_flat_object() {
        let mut snapshot = StateSnapshot::new();
        snapshot.insert("lifeplan:a", "1");
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"lifeplan:a":"1"}"#);

        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
