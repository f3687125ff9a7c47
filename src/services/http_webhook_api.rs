use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::constants::{
    request_timeout, OP_CREATE_WEBHOOK, OP_DELETE_WEBHOOK, OP_GET_WEBHOOK, OP_LIST_WEBHOOKS,
    OP_UPDATE_WEBHOOK, OP_WEBHOOKS_INFO, WEBHOOKS_INFO_PATH, WEBHOOKS_PATH,
};
use crate::enums::api_client_error::ApiClientError;
use crate::errors::ConsoleResult;
use crate::structs::action_info::ActionCatalog;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::webhook::Webhook;
use crate::structs::webhook_payload::{CreateWebhookRequest, WebhookPayload};
use crate::traits::webhook_api::WebhookApi;

/// Webhook API over HTTP with token authentication.
#[derive(Clone)]
pub struct HttpWebhookApi {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpWebhookApi {
    /// Builds the client. The base URL must parse.
    pub fn new(config: &ApiConfig) -> ConsoleResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.resolve_token(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn webhook_endpoint(&self, id: u64) -> String {
        format!("{}/{}{}/", self.base_url, WEBHOOKS_PATH, id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/json");
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(StatusCode, String), ApiClientError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiClientError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiClientError::NetworkError(e.to_string()))?;
        Ok((status, body))
    }

    async fn call<T: DeserializeOwned>(&self, operation: &str, url: &str, request: RequestBuilder) -> ConsoleResult<T> {
        log::debug!("➡️ {} {}", operation, url);

        let (status, body) = self
            .execute(request)
            .await
            .map_err(|e| e.into_console_error(operation, url))?;

        log::debug!("⬅️ {} answered {}", operation, status);
        parse_reply(status, &body).map_err(|e| {
            log::warn!("❌ {} failed: {}", operation, e);
            e.into_console_error(operation, url)
        })
    }
}

#[async_trait]
impl WebhookApi for HttpWebhookApi {
    async fn webhooks(&self) -> ConsoleResult<Vec<Webhook>> {
        let url = self.endpoint(WEBHOOKS_PATH);
        self.call(OP_LIST_WEBHOOKS, &url, self.client.get(&url)).await
    }

    async fn webhooks_info(&self) -> ConsoleResult<ActionCatalog> {
        let url = self.endpoint(WEBHOOKS_INFO_PATH);
        self.call(OP_WEBHOOKS_INFO, &url, self.client.get(&url)).await
    }

    async fn webhook(&self, id: u64) -> ConsoleResult<Webhook> {
        let url = self.webhook_endpoint(id);
        self.call(OP_GET_WEBHOOK, &url, self.client.get(&url)).await
    }

    async fn create_webhook(&self, url: &str) -> ConsoleResult<Webhook> {
        let endpoint = self.endpoint(WEBHOOKS_PATH);
        let body = CreateWebhookRequest { url: url.to_string() };
        self.call(OP_CREATE_WEBHOOK, &endpoint, self.client.post(&endpoint).json(&body)).await
    }

    async fn update_webhook(&self, id: u64, payload: &WebhookPayload) -> ConsoleResult<Webhook> {
        let url = self.webhook_endpoint(id);
        self.call(OP_UPDATE_WEBHOOK, &url, self.client.put(&url).json(payload)).await
    }

    async fn delete_webhook(&self, id: u64) -> ConsoleResult<()> {
        let url = self.webhook_endpoint(id);
        self.call(OP_DELETE_WEBHOOK, &url, self.client.delete(&url)).await
    }
}

/// Turns a raw backend answer into a resource.
///
/// A non-empty `error_message` means failure whatever the status code.
pub fn parse_reply<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiClientError> {
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(ApiClientError::SerializationError(e.to_string())),
            Err(_) => return Err(ApiClientError::RequestFailed(status_text(status))),
        }
    };

    if let Some(message) = error_message(&value) {
        return Err(ApiClientError::RequestFailed(message));
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiClientError::AuthenticationError(describe_failure(status, &value)));
    }

    if !status.is_success() {
        return Err(ApiClientError::RequestFailed(describe_failure(status, &value)));
    }

    serde_json::from_value(value).map_err(|e| ApiClientError::SerializationError(e.to_string()))
}

fn error_message(value: &Value) -> Option<String> {
    value
        .get("error_message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

fn describe_failure(status: StatusCode, value: &Value) -> String {
    if let Some(detail) = value.get("detail").and_then(Value::as_str) {
        return detail.to_string();
    }

    // field validation errors: {"url": ["Enter a valid URL."]}
    if let Some(fields) = value.as_object() {
        let parts: Vec<String> = fields
            .iter()
            .map(|(field, messages)| match messages {
                Value::Array(items) => {
                    let texts: Vec<String> = items
                        .iter()
                        .map(|m| m.as_str().map_or_else(|| m.to_string(), ToString::to_string))
                        .collect();
                    format!("{}: {}", field, texts.join(" "))
                }
                Value::String(text) => format!("{}: {}", field, text),
                other => format!("{}: {}", field, other),
            })
            .collect();
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    status_text(status)
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
