/// `[api]` section.
pub mod api_config;
/// Whole config file.
#[allow(clippy::module_inception)]
pub mod config;
/// `[server]` section.
pub mod server_config;
