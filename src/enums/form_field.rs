use serde::{Deserialize, Serialize};

/// One edit to a plain field of the detail form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum FormField {
    /// Target URL.
    Url(String),
    /// Enabled flag.
    IsActive(bool),
    /// Whether the event body is posted.
    SendPayload(bool),
}
