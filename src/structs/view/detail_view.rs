use serde::Serialize;
use crate::structs::header_row::HeaderRow;
use crate::structs::webhook_form::WebhookForm;

/// Everything the detail view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Id of the open webhook.
    pub webhook_id: u64,
    /// Plain fields as edited.
    pub form: WebhookForm,
    /// Header rows as edited.
    pub headers: Vec<HeaderRow>,
    /// Send-for-all as edited.
    pub send_for_all_actions: bool,
    /// Hidden while send-for-all is on.
    pub actions: Option<Vec<ActionToggle>>,
    /// Message from the last failed save.
    pub error: Option<String>,
}

/// One action checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionToggle {
    /// Action key.
    pub key: String,
    /// Catalog title.
    pub name: String,
    /// Catalog description.
    pub description: Option<String>,
    /// Whether the session selects it.
    pub checked: bool,
}
