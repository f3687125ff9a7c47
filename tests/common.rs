use webhook_console::structs::action_info::{ActionCatalog, ActionInfo};
use webhook_console::structs::webhook::Webhook;
use webhook_console::ui::webhook_page::WebhookPage;

pub fn foo_webhook() -> Webhook {
    let mut webhook = Webhook::new(1, "http://example.com/hook");
    webhook.headers.insert("X-Foo".to_string(), "bar".to_string());
    webhook.actions = vec!["a".to_string()];
    webhook.send_for_all_actions = false;
    webhook
}

pub fn catalog() -> ActionCatalog {
    let mut info = ActionCatalog::new();
    info.insert("a".to_string(), ActionInfo::named("Action A"));
    info.insert("b".to_string(), ActionInfo::named("Action B"));
    info.insert("c".to_string(), ActionInfo::named("Action C"));
    info
}

pub fn loaded_page(webhooks: Vec<Webhook>) -> WebhookPage {
    let mut page = WebhookPage::new();
    page.apply_webhooks(webhooks);
    page.apply_webhooks_info(catalog());
    page
}
