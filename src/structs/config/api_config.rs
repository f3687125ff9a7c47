use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Where the webhook backend lives and how to authenticate against it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of the backend, e.g. `http://localhost:8080`.
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    /// Inline token. Takes precedence over `token_env`.
    #[serde(default)]
    pub token: Option<String>,

    /// Environment variable holding the token.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    /// Per-request timeout in seconds.
    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Inline token first, then the environment. Blank values count as unset.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| std::env::var(&self.token_env).ok().filter(|token| !token.trim().is_empty()))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            token: None,
            token_env: ConfigHelper::default_token_env(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
