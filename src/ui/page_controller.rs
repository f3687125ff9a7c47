use std::sync::Arc;
use tokio::sync::Mutex;

use crate::enums::page_event::PageEvent;
use crate::enums::page_view::PageView;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::webhook::Webhook;
use crate::traits::webhook_api::WebhookApi;
use crate::ui::webhook_page::WebhookPage;

/// Drives a [`WebhookPage`] against the backend.
///
/// The page lock is never held across a request: results are applied once
/// they arrive, and whichever response lands last wins.
#[derive(Clone)]
pub struct PageController {
    api: Arc<dyn WebhookApi>,
    page: Arc<Mutex<WebhookPage>>,
}

impl PageController {
    /// Creates a controller over a page that has not been loaded yet.
    pub fn new(api: Arc<dyn WebhookApi>) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(WebhookPage::new())),
        }
    }

    /// Shared handle to the page state.
    pub fn page(&self) -> Arc<Mutex<WebhookPage>> {
        Arc::clone(&self.page)
    }

    /// Current view snapshot.
    pub async fn view(&self) -> PageView {
        self.page.lock().await.view()
    }

    /// Fetches the collection and the action catalog concurrently.
    pub async fn mount(&self) -> ConsoleResult<()> {
        let (webhooks, info) = futures::join!(self.fetch_webhooks(), self.fetch_webhooks_info());

        let errors: Vec<ConsoleError> = [webhooks, info].into_iter().filter_map(Result::err).collect();
        match ConsoleError::combine(errors, "loading the webhooks page") {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Replaces the collection with the backend's current list.
    pub async fn fetch_webhooks(&self) -> ConsoleResult<()> {
        let webhooks = self.api.webhooks().await?;
        self.page.lock().await.apply_webhooks(webhooks);
        Ok(())
    }

    /// Loads the action catalog.
    pub async fn fetch_webhooks_info(&self) -> ConsoleResult<()> {
        let info = self.api.webhooks_info().await?;
        log::debug!("Received {} action types", info.len());
        self.page.lock().await.apply_webhooks_info(info);
        Ok(())
    }

    /// Applies one user event and returns the resulting view.
    pub async fn dispatch(&self, event: PageEvent) -> ConsoleResult<PageView> {
        let mut page = self.page.lock().await;
        page.handle(event)?;
        Ok(page.view())
    }

    /// Submits the open edit session as a full-record update.
    ///
    /// On success the collection is refetched; on failure the session is
    /// left as it was and the message goes to the form error slot. A failed
    /// refetch is logged and does not turn an accepted update into an error.
    pub async fn save(&self) -> ConsoleResult<Webhook> {
        let (id, payload) = {
            let mut page = self.page.lock().await;
            let request = page.save_request()?;
            page.set_form_error(None);
            request
        };

        match self.api.update_webhook(id, &payload).await {
            Ok(updated) => {
                log::info!("💾 Saved webhook {}", id);
                self.refresh_after("saved", id).await;
                Ok(updated)
            }
            Err(error) => {
                log::warn!("❌ Saving webhook {} failed: {}", id, error.form_message());
                self.page.lock().await.set_form_error(Some(error.form_message()));
                Err(error)
            }
        }
    }

    /// Submits the create dialog. Once the backend accepts the record the
    /// collection is refetched and the dialog closes, even if the refetch
    /// fails.
    pub async fn create(&self) -> ConsoleResult<Webhook> {
        let url = self.page.lock().await.create_request()?;

        match self.api.create_webhook(&url).await {
            Ok(created) => {
                log::info!("✨ Created webhook {} for {}", created.id, created.url);
                self.refresh_after("created", created.id).await;
                self.page.lock().await.close_create();
                Ok(created)
            }
            Err(error) => {
                log::warn!("❌ Creating webhook failed: {}", error.form_message());
                self.page.lock().await.fail_create(error.form_message());
                Err(error)
            }
        }
    }

    /// Deletes the open webhook, then returns to a refreshed list.
    pub async fn delete_active(&self) -> ConsoleResult<u64> {
        let id = self.page.lock().await.active_webhook_id().ok_or_else(|| {
            ConsoleError::user_input_error("delete", "a selected webhook", "Select a webhook before deleting it")
        })?;

        match self.api.delete_webhook(id).await {
            Ok(()) => {
                log::info!("🗑️ Deleted webhook {}", id);
                self.page.lock().await.back();
                self.refresh_after("deleted", id).await;
                Ok(id)
            }
            Err(error) => {
                self.page.lock().await.set_form_error(Some(error.form_message()));
                Err(error)
            }
        }
    }

    /// Refetches the collection after a write the backend already accepted.
    async fn refresh_after(&self, done: &str, id: u64) {
        if let Err(error) = self.fetch_webhooks().await {
            log::warn!("⚠️ Webhook {} was {} but the list could not be reloaded: {}", id, done, error.form_message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::header_field::HeaderField;
    use crate::structs::action_info::{ActionCatalog, ActionInfo};
    use crate::traits::webhook_api::MockWebhookApi;
    use mockall::predicate::eq;
    use indexmap::IndexMap;

    fn catalog() -> ActionCatalog {
        let mut info = ActionCatalog::new();
        info.insert("a".to_string(), ActionInfo::named("Action A"));
        info.insert("b".to_string(), ActionInfo::named("Action B"));
        info
    }

    fn hook() -> Webhook {
        let mut webhook = Webhook::new(1, "http://example.com/hook");
        webhook.headers.insert("X-Foo".to_string(), "bar".to_string());
        webhook.actions = vec!["a".to_string()];
        webhook.send_for_all_actions = false;
        webhook
    }

    fn mounted_api() -> MockWebhookApi {
        let mut api = MockWebhookApi::new();
        api.expect_webhooks().returning(|| Ok(vec![hook()]));
        api.expect_webhooks_info().returning(|| Ok(catalog()));
        api
    }

    #[tokio::test]
    async fn page_stays_loading_until_both_fetches_succeed() {
        let mut api = MockWebhookApi::new();
        api.expect_webhooks().returning(|| Ok(vec![hook()]));
        api.expect_webhooks_info()
            .returning(|| Err(ConsoleError::request_failed("webhooksInfo", "down")));
        let controller = PageController::new(Arc::new(api));

        let err = controller.mount().await.unwrap_err();

        assert!(err.is_request_failure());
        assert_eq!(controller.view().await, PageView::Loading);
    }

    #[tokio::test]
    async fn save_sends_reconciled_payload_and_refetches() {
        let mut api = MockWebhookApi::new();
        api.expect_webhooks().times(2).returning(|| Ok(vec![hook()]));
        api.expect_webhooks_info().returning(|| Ok(catalog()));
        api.expect_update_webhook()
            .withf(|id, payload| {
                let mut headers = IndexMap::new();
                headers.insert("X-Foo".to_string(), "baz".to_string());
                *id == 1
                    && payload.headers == headers
                    && payload.actions == vec!["a".to_string()]
                    && !payload.send_for_all_actions
            })
            .times(1)
            .returning(|_, _| Ok(hook()));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::SelectWebhook { id: Some(1) }).await.unwrap();
        controller
            .dispatch(PageEvent::EditHeader { field: HeaderField::Value, index: 0, text: "baz".to_string() })
            .await
            .unwrap();

        controller.save().await.unwrap();

        assert!(controller.page().lock().await.form_error().is_none());
    }

    #[tokio::test]
    async fn failed_save_keeps_session_and_records_error() {
        let mut api = mounted_api();
        api.expect_update_webhook()
            .returning(|_, _| Err(ConsoleError::request_failed("updateWebhook", "url: Enter a valid URL.")));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::SelectWebhook { id: Some(1) }).await.unwrap();
        controller.dispatch(PageEvent::AddHeader).await.unwrap();
        let before = controller.page().lock().await.editor().clone();

        assert!(controller.save().await.is_err());

        let page = controller.page();
        let page = page.lock().await;
        assert_eq!(page.editor(), &before);
        assert_eq!(page.form_error(), Some("url: Enter a valid URL."));
    }

    #[tokio::test]
    async fn failed_create_keeps_modal_open_without_refetch() {
        let mut api = MockWebhookApi::new();
        api.expect_webhooks().times(1).returning(|| Ok(vec![hook()]));
        api.expect_webhooks_info().returning(|| Ok(catalog()));
        api.expect_create_webhook()
            .withf(|url| url == "not a url")
            .returning(|_| Err(ConsoleError::request_failed("createWebhook", "url: Enter a valid URL.")));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::OpenCreate).await.unwrap();
        controller
            .dispatch(PageEvent::EditCreateUrl { url: "not a url".to_string() })
            .await
            .unwrap();

        assert!(controller.create().await.is_err());

        let modal = controller.page().lock().await.create_modal().cloned();
        let modal = modal.expect("modal stays open");
        assert_eq!(modal.error.as_deref(), Some("url: Enter a valid URL."));
    }

    #[tokio::test]
    async fn successful_create_refetches_then_closes_modal() {
        let mut api = MockWebhookApi::new();
        let mut calls = 0;
        api.expect_webhooks().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![hook()])
            } else {
                Ok(vec![hook(), Webhook::new(2, "http://example.com/new")])
            }
        });
        api.expect_webhooks_info().returning(|| Ok(catalog()));
        api.expect_create_webhook()
            .returning(|url| Ok(Webhook::new(2, url)));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::OpenCreate).await.unwrap();
        controller
            .dispatch(PageEvent::EditCreateUrl { url: "http://example.com/new".to_string() })
            .await
            .unwrap();

        let created = controller.create().await.unwrap();

        assert_eq!(created.id, 2);
        let page = controller.page();
        let page = page.lock().await;
        assert!(page.create_modal().is_none());
        assert_eq!(page.webhooks().len(), 2);
    }

    fn api_with_failing_refetch() -> MockWebhookApi {
        let mut api = MockWebhookApi::new();
        let mut calls = 0;
        api.expect_webhooks().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![hook()])
            } else {
                Err(ConsoleError::network_error("webhooks", None, None, "connection reset"))
            }
        });
        api.expect_webhooks_info().returning(|| Ok(catalog()));
        api
    }

    #[tokio::test]
    async fn create_closes_modal_when_refetch_fails() {
        let mut api = api_with_failing_refetch();
        api.expect_create_webhook()
            .times(1)
            .returning(|url| Ok(Webhook::new(2, url)));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::OpenCreate).await.unwrap();
        controller
            .dispatch(PageEvent::EditCreateUrl { url: "http://example.com/new".to_string() })
            .await
            .unwrap();

        let created = controller.create().await.unwrap();

        assert_eq!(created.id, 2);
        assert!(controller.page().lock().await.create_modal().is_none());
    }

    #[tokio::test]
    async fn save_succeeds_when_refetch_fails() {
        let mut api = api_with_failing_refetch();
        api.expect_update_webhook()
            .times(1)
            .returning(|_, _| Ok(hook()));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::SelectWebhook { id: Some(1) }).await.unwrap();

        let updated = controller.save().await.unwrap();

        assert_eq!(updated.id, 1);
        assert!(controller.page().lock().await.form_error().is_none());
    }

    #[tokio::test]
    async fn delete_returns_to_refreshed_list() {
        let mut api = MockWebhookApi::new();
        let mut calls = 0;
        api.expect_webhooks().returning(move || {
            calls += 1;
            if calls == 1 { Ok(vec![hook()]) } else { Ok(Vec::new()) }
        });
        api.expect_webhooks_info().returning(|| Ok(catalog()));
        api.expect_delete_webhook().with(eq(1u64)).returning(|_| Ok(()));
        let controller = PageController::new(Arc::new(api));
        controller.mount().await.unwrap();
        controller.dispatch(PageEvent::SelectWebhook { id: Some(1) }).await.unwrap();

        assert_eq!(controller.delete_active().await.unwrap(), 1);

        match controller.view().await {
            PageView::List(list) => assert!(list.webhooks.is_empty()),
            other => panic!("expected list view, got {:?}", other),
        }
    }
}
