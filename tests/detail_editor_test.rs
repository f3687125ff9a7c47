use indexmap::IndexMap;
use webhook_console::enums::header_field::HeaderField;
use webhook_console::structs::action_set::ActionSet;
use webhook_console::structs::webhook::Webhook;
use webhook_console::ui::detail_editor::DetailEditor;

use crate::common::foo_webhook;

fn open_editor() -> DetailEditor {
    let mut editor = DetailEditor::new();
    editor.select(Some(&foo_webhook()));
    editor
}

#[test]
fn add_header_is_noop_while_blank_row_exists() {
    let mut editor = open_editor();
    assert!(editor.add_header().unwrap());
    let before = editor.header_snapshot().unwrap();

    assert!(!editor.add_header().unwrap());

    assert_eq!(editor.header_snapshot().unwrap(), before);
}

#[test]
fn remove_header_shifts_later_rows_down() {
    let mut editor = open_editor();
    editor.add_header().unwrap();
    editor.edit_header(HeaderField::Key, 1, "X-Bar").unwrap();
    editor.add_header().unwrap();
    editor.edit_header(HeaderField::Key, 2, "X-Baz").unwrap();

    let removed = editor.remove_header(0).unwrap();

    assert_eq!(removed.key, "X-Foo");
    let keys: Vec<String> = editor.header_snapshot().unwrap().iter().map(|r| r.key.clone()).collect();
    assert_eq!(keys, vec!["X-Bar".to_string(), "X-Baz".to_string()]);
}

#[test]
fn header_edit_does_not_touch_earlier_snapshot() {
    let mut editor = open_editor();
    let rendered = editor.header_snapshot().unwrap();

    editor.edit_header(HeaderField::Value, 0, "baz").unwrap();

    assert_eq!(rendered[0].value, "bar");
    assert_eq!(editor.header_snapshot().unwrap()[0].value, "baz");
}

#[test]
fn toggling_an_action_on_and_off_restores_the_set() {
    let mut editor = open_editor();
    let before = editor.session().unwrap().actions().clone();

    editor.toggle_action("b", true).unwrap();
    assert!(editor.session().unwrap().actions().contains("b"));
    editor.toggle_action("b", false).unwrap();

    assert_eq!(editor.session().unwrap().actions(), &before);
}

#[test]
fn send_for_all_round_trip_keeps_selected_actions() {
    let mut editor = open_editor();
    editor.toggle_action("c", true).unwrap();
    let before = editor.session().unwrap().actions().clone();

    editor.set_send_for_all(true).unwrap();
    assert_eq!(editor.session().unwrap().actions(), &before);
    editor.set_send_for_all(false).unwrap();

    assert_eq!(editor.session().unwrap().actions(), &ActionSet::from_keys(["a", "c"]));
}

#[test]
fn edited_header_value_reaches_the_payload() {
    let mut editor = open_editor();
    editor.edit_header(HeaderField::Value, 0, "baz").unwrap();

    let (id, payload) = editor.prepare_payload().unwrap();

    let mut headers = IndexMap::new();
    headers.insert("X-Foo".to_string(), "baz".to_string());
    assert_eq!(id, 1);
    assert_eq!(payload.headers, headers);
    assert_eq!(payload.actions, vec!["a".to_string()]);
    assert!(!payload.send_for_all_actions);
    assert_eq!(payload.url, "http://example.com/hook");
}

#[test]
fn duplicate_header_keys_collapse_to_the_later_row() {
    let mut editor = DetailEditor::new();
    let mut webhook = foo_webhook();
    webhook.headers.clear();
    editor.select(Some(&webhook));

    editor.add_header().unwrap();
    editor.edit_header(HeaderField::Key, 0, "A").unwrap();
    editor.edit_header(HeaderField::Value, 0, "first").unwrap();
    editor.add_header().unwrap();
    editor.edit_header(HeaderField::Key, 1, "A").unwrap();
    editor.edit_header(HeaderField::Value, 1, "second").unwrap();

    let (_, payload) = editor.prepare_payload().unwrap();

    assert_eq!(payload.headers.len(), 1);
    assert_eq!(payload.headers.get("A").map(String::as_str), Some("second"));
}

#[test]
fn reselecting_discards_unsaved_edits() {
    let mut editor = open_editor();
    editor.edit_header(HeaderField::Value, 0, "changed").unwrap();
    editor.toggle_action("b", true).unwrap();

    editor.select(Some(&foo_webhook()));

    let session = editor.session().unwrap();
    assert_eq!(session.headers().get(0).unwrap().value, "bar");
    assert!(!session.actions().contains("b"));
}

#[test]
fn header_rows_follow_the_stored_key_order() {
    let webhook: Webhook = serde_json::from_str(
        r#"{"id": 7, "url": "http://example.com/z", "headers": {"Z": "1", "A": "2"}}"#,
    )
    .unwrap();
    let mut editor = DetailEditor::new();
    editor.select(Some(&webhook));

    let keys: Vec<String> = editor.header_snapshot().unwrap().iter().map(|r| r.key.clone()).collect();
    assert_eq!(keys, vec!["Z".to_string(), "A".to_string()]);

    let (_, payload) = editor.prepare_payload().unwrap();
    let sent: Vec<&str> = payload.headers.keys().map(String::as_str).collect();
    assert_eq!(sent, vec!["Z", "A"]);
}
