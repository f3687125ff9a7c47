use async_trait::async_trait;
use crate::errors::ConsoleResult;
use crate::structs::action_info::ActionCatalog;
use crate::structs::webhook::Webhook;
use crate::structs::webhook_payload::WebhookPayload;

/// The backend webhook resource.
///
/// Every method fails with [`crate::errors::ConsoleError::RequestFailed`] when
/// the backend answers with an `error_message`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookApi: Send + Sync {
    async fn webhooks(&self) -> ConsoleResult<Vec<Webhook>>;

    async fn webhooks_info(&self) -> ConsoleResult<ActionCatalog>;

    async fn webhook(&self, id: u64) -> ConsoleResult<Webhook>;

    async fn create_webhook(&self, url: &str) -> ConsoleResult<Webhook>;

    async fn update_webhook(&self, id: u64, payload: &WebhookPayload) -> ConsoleResult<Webhook>;

    async fn delete_webhook(&self, id: u64) -> ConsoleResult<()>;
}
