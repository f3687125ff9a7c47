/// Edit session of the open webhook.
pub mod detail_editor;
/// Network effects around the page.
pub mod page_controller;
/// Local HTTP server for the admin page.
pub mod page_server;
/// The page state machine.
pub mod webhook_page;
