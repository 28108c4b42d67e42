//! Idea domain models.

use serde::{Deserialize, Serialize};

/// A captured business idea. Linking to a brand is by denormalized name,
/// not referential integrity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub linked_brand: Option<String>,
    pub created_at: String,
}

/// Input model for capturing a new idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub linked_brand: Option<String>,
}

/// Partial update; a field left as `None` is untouched, `linked_brand`
/// uses the double option to distinguish "leave alone" from "clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::utils::double_option"
    )]
    pub linked_brand: Option<Option<String>>,
}

impl Idea {
    pub fn apply(&mut self, update: IdeaUpdate) {
        if let Some(text) = update.text {
            self.text = text;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(linked_brand) = update.linked_brand {
            self.linked_brand = linked_brand;
        }
    }
}
