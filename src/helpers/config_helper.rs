use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_PORT_RANGE_END,
    DEFAULT_SERVER_PORT_RANGE_START, DEFAULT_TOKEN_ENV,
};

/// Default values referenced from `#[serde(default = ...)]`.
pub struct ConfigHelper;

impl ConfigHelper {
    /// [`DEFAULT_BASE_URL`]
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    /// [`DEFAULT_TOKEN_ENV`]
    pub fn default_token_env() -> String {
        DEFAULT_TOKEN_ENV.to_string()
    }

    /// [`DEFAULT_REQUEST_TIMEOUT_SECS`]
    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    /// [`DEFAULT_SERVER_PORT_RANGE_START`]
    pub const fn default_port_range_start() -> u16 {
        DEFAULT_SERVER_PORT_RANGE_START
    }

    /// [`DEFAULT_SERVER_PORT_RANGE_END`]
    pub const fn default_port_range_end() -> u16 {
        DEFAULT_SERVER_PORT_RANGE_END
    }

    /// Browsers open by default.
    pub const fn default_open_browser() -> bool {
        true
    }
}
