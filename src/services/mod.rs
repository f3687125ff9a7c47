/// `reqwest` client for the webhook endpoints.
pub mod http_webhook_api;
