//! Administration console for backend webhooks.
//!
//! The webhooks page is modelled as a synchronous state machine
//! ([`ui::webhook_page::WebhookPage`]) driven by [`ui::page_controller::PageController`],
//! which performs the requests through a [`traits::webhook_api::WebhookApi`].
//! The page is exposed through the command line and a local admin page.

/// Configuration loading and crate-wide constants.
pub mod config;
/// Events, views, commands and other closed sets of values.
pub mod enums;
/// The crate error type and its reporting.
pub mod errors;
/// Serde defaults and command line replay onto the page.
pub mod helpers;
/// HTTP implementation of the webhook API.
pub mod services;
/// Wire types, editor state and view snapshots.
pub mod structs;
/// The backend seam.
pub mod traits;
/// Page state machine, controller and local admin server.
pub mod ui;
/// Command execution.
pub mod workers;
