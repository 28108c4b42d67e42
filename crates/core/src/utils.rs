//! Small shared helpers.

use serde::{Deserialize, Deserializer};

/// Deserializer for nullable partial-update fields. Plain
/// `Option<Option<T>>` folds JSON `null` into "field absent"; routing the
/// field through this helper keeps the distinction: absent means "leave
/// alone", `null` means "clear".
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        field: Option<Option<String>>,
    }

    #[test]
    fn null_clears_and_absence_leaves_alone() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.field, None);

        let cleared: Patch = serde_json::from_str(r#"{"field":null}"#).unwrap();
        assert_eq!(cleared.field, Some(None));

        let set: Patch = serde_json::from_str(r#"{"field":"x"}"#).unwrap();
        assert_eq!(set.field, Some(Some("x".to_string())));
    }
}
