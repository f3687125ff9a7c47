use std::time::Duration;

/// Backend used when the config names none.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Environment variable read for the API token.
pub const DEFAULT_TOKEN_ENV: &str = "WEBHOOK_CONSOLE_API_TOKEN";
/// Per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// First port tried by `serve`.
pub const DEFAULT_SERVER_PORT_RANGE_START: u16 = 8300;
/// End of the port search, exclusive.
pub const DEFAULT_SERVER_PORT_RANGE_END: u16 = 8400;
/// Pause after signalling shutdown.
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

/// Directory under the home directory holding the config.
pub const CONFIG_DIR_NAME: &str = ".webhook-console";
/// File name inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Collection endpoint, relative to the base URL.
pub const WEBHOOKS_PATH: &str = "api/webhooks/";
/// Action catalog endpoint.
pub const WEBHOOKS_INFO_PATH: &str = "api/webhooks/info/";

/// Operation names used in errors and logs.
pub const OP_LIST_WEBHOOKS: &str = "webhooks";
/// Action catalog fetch.
pub const OP_WEBHOOKS_INFO: &str = "webhooksInfo";
/// Single record fetch.
pub const OP_GET_WEBHOOK: &str = "webhook";
/// Create call.
pub const OP_CREATE_WEBHOOK: &str = "createWebhook";
/// Full-record update.
pub const OP_UPDATE_WEBHOOK: &str = "updateWebhook";
/// Delete call.
pub const OP_DELETE_WEBHOOK: &str = "deleteWebhook";

/// Timeout for one backend request.
pub fn request_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

/// Milliseconds as a `Duration`.
pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
