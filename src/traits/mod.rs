/// Async API used by the page controller.
pub mod webhook_api;
