use serde::{Deserialize, Serialize};
use crate::enums::form_field::FormField;
use crate::enums::header_field::HeaderField;

/// Synchronous user events understood by the webhook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Opens a webhook, or closes the detail view with `None`.
    SelectWebhook { id: Option<u64> },
    /// Returns to the list.
    Back,
    /// Appends a blank row unless one is already there.
    AddHeader,
    /// Drops the row at `index`.
    RemoveHeader { index: usize },
    /// Rewrites one half of the row at `index`.
    EditHeader { field: HeaderField, index: usize, text: String },
    /// Selects or clears one action.
    ToggleAction { key: String, checked: bool },
    /// Flips send-for-all. The selected actions are kept.
    SetSendForAll { checked: bool },
    /// Edits url, active or payload.
    EditForm { field: FormField },
    /// Opens the create dialog with an empty URL.
    OpenCreate,
    /// Types into the create dialog.
    EditCreateUrl { url: String },
    /// Closes the dialog and drops its contents.
    CloseCreate,
}
