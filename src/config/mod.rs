/// Reads, validates and writes the config file.
pub mod config_manager;
/// Defaults, endpoint paths and operation names.
pub mod constants;
