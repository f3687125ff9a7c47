use serde::{Deserialize, Serialize};

/// One header pair as edited. Keys may be blank or repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderRow {
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl HeaderRow {
    /// Row from borrowed parts.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// True while the name is empty.
    pub fn is_blank_key(&self) -> bool {
        self.key.is_empty()
    }
}
