/// Low-level HTTP client failures.
pub mod api_client_error;
/// CLI subcommands.
pub mod commands;
/// Plain form field edits.
pub mod form_field;
/// Which half of a header row is edited.
pub mod header_field;
/// User events understood by the page.
pub mod page_event;
/// Serialisable page snapshots.
pub mod page_view;
