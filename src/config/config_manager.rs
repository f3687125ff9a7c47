use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::config::config::Config;

/// Reads and writes `config.toml`.
pub struct ConfigManager;

impl ConfigManager {
    /// `~/.webhook-console/config.toml`, if a home directory is known.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the given file, or the default location when `path` is `None`.
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> ConsoleResult<Config> {
        let location = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Config::default()),
            },
        };

        if !location.exists() {
            log::debug!("No config at {}, using defaults", location.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", location.display());
        let content = fs::read_to_string(&location).map_err(|e| ConsoleError::ConfigurationFileError {
            path: location.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Rejects values the client cannot work with. A missing token only warns.
    pub fn validate_config(config: &Config) -> ConsoleResult<()> {
        let base_url = config.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConsoleError::config_error(
                &format!("base_url '{}' is not an http(s) URL", base_url),
                Some("api.base_url"),
                Some("Use something like http://localhost:8080"),
            ));
        }

        if config.api.timeout_secs == 0 {
            return Err(ConsoleError::config_error(
                "timeout_secs must be greater than zero",
                Some("api.timeout_secs"),
                None,
            ));
        }

        if config.server.port_range_start >= config.server.port_range_end {
            return Err(ConsoleError::config_error(
                &format!(
                    "port range {}..{} is empty",
                    config.server.port_range_start, config.server.port_range_end
                ),
                Some("server.port_range_start"),
                Some("port_range_start must be lower than port_range_end"),
            ));
        }

        if config.api.resolve_token().is_none() {
            log::warn!(
                "⚠️ No API token configured; set api.token or the {} environment variable",
                config.api.token_env
            );
        }

        Ok(())
    }

    /// Writes a commented sample config. Refuses to overwrite an existing file.
    pub fn create_sample_config(path: Option<&Path>) -> ConsoleResult<PathBuf> {
        let location = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                ConsoleError::system_error("init", "Could not determine the home directory")
            })?,
        };

        if location.exists() {
            return Err(ConsoleError::ConfigurationFileError {
                path: location.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }

        if let Some(parent) = location.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample_config = r#"# Webhook Console Configuration

[api]
# Root URL of the backend that exposes /api/webhooks/
base_url = "http://localhost:8080"

# Either put the token here or export it in the environment variable below
# token = "..."
token_env = "WEBHOOK_CONSOLE_API_TOKEN"

# Per-request timeout in seconds
timeout_secs = 30

[server]
# The local admin page binds to the first free port in this range
port_range_start = 8300
port_range_end = 8400

# Open the admin page in the default browser on `serve`
open_browser = true
"#;

        fs::write(&location, sample_config)?;
        log::info!("✅ Sample configuration created at {}", location.display());
        Ok(location)
    }
}
