use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Full-record body sent with an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Target URL.
    pub url: String,
    /// Enabled flag.
    pub is_active: bool,
    /// Payload flag.
    pub send_payload: bool,
    /// Send-for-all flag.
    pub send_for_all_actions: bool,
    /// Collapsed header rows.
    pub headers: IndexMap<String, String>,
    /// Selected action keys.
    pub actions: Vec<String>,
}

/// Body of a create call; everything else takes backend defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    /// Target URL.
    pub url: String,
}
