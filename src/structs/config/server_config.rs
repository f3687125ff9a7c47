use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Local admin page settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// First port to try.
    #[serde(default = "ConfigHelper::default_port_range_start")]
    pub port_range_start: u16,

    /// Port search stops before this one.
    #[serde(default = "ConfigHelper::default_port_range_end")]
    pub port_range_end: u16,

    /// Open the page in a browser once the server is up.
    #[serde(default = "ConfigHelper::default_open_browser")]
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port_range_start: ConfigHelper::default_port_range_start(),
            port_range_end: ConfigHelper::default_port_range_end(),
            open_browser: ConfigHelper::default_open_browser(),
        }
    }
}
