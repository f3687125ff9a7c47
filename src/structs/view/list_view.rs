use serde::Serialize;
use crate::structs::webhook::Webhook;

/// Everything the list view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Rows in backend order.
    pub webhooks: Vec<WebhookListItem>,
    /// Present while the create dialog is open.
    pub create_modal: Option<CreateModalView>,
}

/// One row of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookListItem {
    /// Webhook id.
    pub id: u64,
    /// Target URL.
    pub url: String,
    /// Enabled flag.
    pub is_active: bool,
    /// Send-for-all flag.
    pub send_for_all_actions: bool,
    /// Number of subscribed actions.
    pub action_count: usize,
}

impl From<&Webhook> for WebhookListItem {
    fn from(webhook: &Webhook) -> Self {
        Self {
            id: webhook.id,
            url: webhook.url.clone(),
            is_active: webhook.is_active,
            send_for_all_actions: webhook.send_for_all_actions,
            action_count: webhook.actions.len(),
        }
    }
}

/// The open create dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateModalView {
    /// URL typed so far.
    pub url: String,
    /// Message from the last failed submit.
    pub error: Option<String>,
}
