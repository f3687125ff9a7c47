use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::server_config::ServerConfig;

/// Contents of `config.toml`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local admin page.
    #[serde(default)]
    pub server: ServerConfig,
}
