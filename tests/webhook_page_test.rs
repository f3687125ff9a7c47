use webhook_console::enums::page_event::PageEvent;
use webhook_console::enums::page_view::PageView;
use webhook_console::errors::ConsoleError;
use webhook_console::structs::action_info::ActionCatalog;
use webhook_console::structs::webhook::Webhook;
use webhook_console::ui::webhook_page::WebhookPage;

use crate::common::{catalog, foo_webhook, loaded_page};

#[test]
fn page_renders_nothing_until_both_fetches_arrive() {
    let mut page = WebhookPage::new();
    assert_eq!(page.view(), PageView::Loading);

    page.apply_webhooks(vec![foo_webhook()]);
    assert_eq!(page.view(), PageView::Loading);

    page.apply_webhooks_info(catalog());
    assert!(matches!(page.view(), PageView::List(_)));
}

#[test]
fn selecting_opens_detail_and_back_keeps_collection() {
    let mut page = loaded_page(vec![foo_webhook(), Webhook::new(2, "http://example.com/other")]);

    page.handle(PageEvent::SelectWebhook { id: Some(2) }).unwrap();
    match page.view() {
        PageView::Detail(detail) => assert_eq!(detail.webhook_id, 2),
        other => panic!("expected detail view, got {:?}", other),
    }

    page.handle(PageEvent::Back).unwrap();
    match page.view() {
        PageView::List(list) => assert_eq!(list.webhooks.len(), 2),
        other => panic!("expected list view, got {:?}", other),
    }
    assert!(!page.editor().is_open());
}

#[test]
fn unknown_id_is_reported_with_available_ids() {
    let mut page = loaded_page(vec![foo_webhook()]);

    let err = page.select_webhook(Some(42)).unwrap_err();

    assert_eq!(err, ConsoleError::WebhookNotFound { id: 42, available: vec![1] });
    assert!(page.active_webhook_id().is_none());
}

#[test]
fn action_toggles_hidden_while_send_for_all() {
    let mut page = loaded_page(vec![foo_webhook()]);
    page.handle(PageEvent::SelectWebhook { id: Some(1) }).unwrap();

    let PageView::Detail(detail) = page.view() else { panic!("expected detail view") };
    let actions = detail.actions.expect("per-action list shown");
    assert_eq!(actions.len(), 3);
    assert!(actions.iter().find(|a| a.key == "a").unwrap().checked);

    page.handle(PageEvent::SetSendForAll { checked: true }).unwrap();
    let PageView::Detail(detail) = page.view() else { panic!("expected detail view") };
    assert!(detail.actions.is_none());
}

#[test]
fn refetch_rebuilds_editor_from_server_record() {
    let mut page = loaded_page(vec![foo_webhook()]);
    page.handle(PageEvent::SelectWebhook { id: Some(1) }).unwrap();
    page.handle(PageEvent::ToggleAction { key: "b".to_string(), checked: true }).unwrap();

    let mut confirmed = foo_webhook();
    confirmed.actions = vec!["a".to_string(), "c".to_string()];
    page.apply_webhooks(vec![confirmed]);

    let actions = page.editor().session().unwrap().actions().to_list();
    assert_eq!(actions, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn refetch_without_active_record_returns_to_list() {
    let mut page = loaded_page(vec![foo_webhook()]);
    page.handle(PageEvent::SelectWebhook { id: Some(1) }).unwrap();

    page.apply_webhooks(Vec::new());

    assert!(page.active_webhook_id().is_none());
    assert!(matches!(page.view(), PageView::List(_)));
}

#[test]
fn create_dialog_keeps_url_and_error() {
    let mut page = loaded_page(Vec::new());
    assert!(page.create_request().is_err());

    page.handle(PageEvent::OpenCreate).unwrap();
    page.handle(PageEvent::EditCreateUrl { url: "http://x".to_string() }).unwrap();
    page.fail_create("url: Enter a valid URL.".to_string());

    assert_eq!(page.create_request().unwrap(), "http://x");
    let PageView::List(list) = page.view() else { panic!("expected list view") };
    let modal = list.create_modal.expect("dialog open");
    assert_eq!(modal.error.as_deref(), Some("url: Enter a valid URL."));

    page.handle(PageEvent::CloseCreate).unwrap();
    assert!(page.create_modal().is_none());
}

#[test]
fn page_events_deserialize_from_json() {
    let event: PageEvent = serde_json::from_str(
        r#"{"type": "edit_form", "field": {"name": "is_active", "value": false}}"#,
    )
    .unwrap();
    let mut page = loaded_page(vec![foo_webhook()]);
    page.handle(PageEvent::SelectWebhook { id: Some(1) }).unwrap();

    page.handle(event).unwrap();

    assert!(!page.editor().session().unwrap().form().is_active);
}

#[test]
fn action_toggles_keep_the_catalog_order() {
    let info: ActionCatalog = serde_json::from_str(
        r#"{"TASKS_CREATED": {"name": "Task created"}, "ANNOTATION_CREATED": {"name": "Annotation created"}}"#,
    )
    .unwrap();
    let mut page = WebhookPage::new();
    page.apply_webhooks(vec![foo_webhook()]);
    page.apply_webhooks_info(info);

    page.handle(PageEvent::SelectWebhook { id: Some(1) }).unwrap();

    let PageView::Detail(detail) = page.view() else {
        panic!("expected detail view");
    };
    let keys: Vec<String> = detail.actions.unwrap().into_iter().map(|action| action.key).collect();
    assert_eq!(keys, vec!["TASKS_CREATED".to_string(), "ANNOTATION_CREATED".to_string()]);
}
