use crate::errors::{ConsoleError, ConsoleResult};

/// Edits requested on the command line for one webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Webhook to edit.
    pub id: u64,
    /// New target URL.
    pub url: Option<String>,
    /// New enabled flag.
    pub is_active: Option<bool>,
    /// New payload flag.
    pub send_payload: Option<bool>,
    /// New send-for-all flag.
    pub send_for_all_actions: Option<bool>,
    /// Headers to set, in order.
    pub headers: Vec<(String, String)>,
    /// Header keys to drop before setting any.
    pub remove_headers: Vec<String>,
    /// Action keys to select.
    pub actions: Vec<String>,
    /// Action keys to clear.
    pub drop_actions: Vec<String>,
}

impl UpdateRequest {
    /// True when no flag asks for a change.
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.is_active.is_none()
            && self.send_payload.is_none()
            && self.send_for_all_actions.is_none()
            && self.headers.is_empty()
            && self.remove_headers.is_empty()
            && self.actions.is_empty()
            && self.drop_actions.is_empty()
    }

    /// Splits `KEY=VALUE` at the first `=`. The value may be empty, the key may not.
    pub fn parse_header_arg(arg: &str) -> ConsoleResult<(String, String)> {
        let invalid = || {
            ConsoleError::user_input_error(arg, "a header as KEY=VALUE", "Example: --header Authorization=Bearer-123")
        };

        let (key, value) = arg.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }
        Ok((key.to_string(), value.to_string()))
    }
}
