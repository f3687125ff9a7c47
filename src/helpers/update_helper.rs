use crate::enums::form_field::FormField;
use crate::enums::header_field::HeaderField;
use crate::enums::page_event::PageEvent;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::update_request::UpdateRequest;
use crate::ui::webhook_page::WebhookPage;

/// Applies command line edits to the webhook page.
pub struct UpdateHelper;

impl UpdateHelper {
    /// Opens the webhook and replays the requested edits as page events, so
    /// the command line goes through the same editor as the admin page.
    pub fn apply(page: &mut WebhookPage, request: &UpdateRequest) -> ConsoleResult<()> {
        page.handle(PageEvent::SelectWebhook { id: Some(request.id) })?;

        if let Some(url) = &request.url {
            page.handle(PageEvent::EditForm { field: FormField::Url(url.clone()) })?;
        }
        if let Some(is_active) = request.is_active {
            page.handle(PageEvent::EditForm { field: FormField::IsActive(is_active) })?;
        }
        if let Some(send_payload) = request.send_payload {
            page.handle(PageEvent::EditForm { field: FormField::SendPayload(send_payload) })?;
        }

        for key in &request.remove_headers {
            while let Some(index) = Self::header_position(page, key) {
                page.handle(PageEvent::RemoveHeader { index })?;
            }
        }

        for (key, value) in &request.headers {
            let index = match Self::header_position(page, key) {
                Some(index) => index,
                None => {
                    if Self::header_position(page, "").is_some() {
                        return Err(ConsoleError::user_input_error(
                            &format!("{}={}", key, value),
                            "a webhook without a blank header name",
                            "Drop the blank header first with --remove-header \"\"",
                        ));
                    }
                    page.handle(PageEvent::AddHeader)?;
                    let index = Self::header_position(page, "").ok_or_else(|| {
                        ConsoleError::system_error("update", "no blank header row after adding one")
                    })?;
                    page.handle(PageEvent::EditHeader {
                        field: HeaderField::Key,
                        index,
                        text: key.clone(),
                    })?;
                    index
                }
            };
            page.handle(PageEvent::EditHeader {
                field: HeaderField::Value,
                index,
                text: value.clone(),
            })?;
        }

        if let Some(checked) = request.send_for_all_actions {
            page.handle(PageEvent::SetSendForAll { checked })?;
        }

        for key in &request.actions {
            Self::ensure_known_action(page, key)?;
            page.handle(PageEvent::ToggleAction { key: key.clone(), checked: true })?;
        }
        for key in &request.drop_actions {
            page.handle(PageEvent::ToggleAction { key: key.clone(), checked: false })?;
        }

        Ok(())
    }

    fn header_position(page: &WebhookPage, key: &str) -> Option<usize> {
        page.editor().session().and_then(|session| session.headers().position(key))
    }

    fn ensure_known_action(page: &WebhookPage, key: &str) -> ConsoleResult<()> {
        match page.webhooks_info() {
            Some(info) if !info.contains_key(key) => {
                let known: Vec<&str> = info.keys().map(String::as_str).collect();
                Err(ConsoleError::user_input_error(
                    key,
                    "a known action key",
                    &format!("Known actions: {}", known.join(", ")),
                ))
            }
            _ => Ok(()),
        }
    }
}
