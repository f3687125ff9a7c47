use serde::{Deserialize, Serialize};

/// Half of a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    /// Header name.
    Key,
    /// Header value.
    Value,
}
