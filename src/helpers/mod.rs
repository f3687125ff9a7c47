/// Serde default values for config sections.
pub mod config_helper;
/// Replays `update` flags as page events.
pub mod update_helper;
