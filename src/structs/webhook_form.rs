use serde::{Deserialize, Serialize};
use crate::enums::form_field::FormField;
use crate::structs::webhook::Webhook;

/// The plain form fields of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookForm {
    /// Target URL.
    pub url: String,
    /// Enabled flag.
    pub is_active: bool,
    /// Payload flag.
    pub send_payload: bool,
}

impl WebhookForm {
    /// Writes one edited field.
    pub fn apply(&mut self, field: FormField) {
        match field {
            FormField::Url(url) => self.url = url,
            FormField::IsActive(is_active) => self.is_active = is_active,
            FormField::SendPayload(send_payload) => self.send_payload = send_payload,
        }
    }
}

impl From<&Webhook> for WebhookForm {
    fn from(webhook: &Webhook) -> Self {
        Self {
            url: webhook.url.clone(),
            is_active: webhook.is_active,
            send_payload: webhook.send_payload,
        }
    }
}
