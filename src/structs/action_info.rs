use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Description of one action type the backend can notify on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    /// Human-readable title.
    pub name: String,
    /// Longer explanation, if the backend has one.
    #[serde(default)]
    pub description: Option<String>,
    /// Key echoed by the backend.
    #[serde(default)]
    pub key: Option<String>,
}

impl ActionInfo {
    /// Entry with only a title.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            key: None,
        }
    }
}

/// Action key to its description, in the order the backend lists them.
pub type ActionCatalog = IndexMap<String, ActionInfo>;
