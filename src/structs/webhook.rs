use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A webhook as the backend persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Backend id.
    pub id: u64,
    /// Target the backend posts to.
    pub url: String,
    /// Disabled webhooks never fire.
    #[serde(default)]
    pub is_active: bool,
    /// Post the event body, not just a ping.
    #[serde(default)]
    pub send_payload: bool,
    /// Fire on every action, ignoring `actions`.
    #[serde(default)]
    pub send_for_all_actions: bool,
    /// Extra request headers, in the order the backend returned them.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// Action keys that fire this webhook.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Owning project, when scoped to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Webhook {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(id: u64, url: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
            is_active: true,
            send_payload: true,
            send_for_all_actions: true,
            headers: IndexMap::new(),
            actions: Vec::new(),
            project: None,
            created_at: None,
            updated_at: None,
        }
    }
}
