mod common;
mod detail_editor_test;
mod webhook_page_test;
