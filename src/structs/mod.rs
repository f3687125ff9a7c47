/// Action catalog entries.
pub mod action_info;
/// Selected action keys.
pub mod action_set;
/// Top-level argument parser.
pub mod cli;
/// Config file sections.
pub mod config;
/// State of the create dialog.
pub mod create_modal;
/// One editable header pair.
pub mod header_row;
/// Ordered, copy-on-write header rows.
pub mod header_rows;
/// View snapshots sent to renderers.
pub mod view;
/// The persisted webhook record.
pub mod webhook;
/// Plain form fields of the detail view.
pub mod webhook_form;
/// Request bodies for create and update.
pub mod webhook_payload;
/// Edits collected from `update` flags.
pub mod update_request;
