use std::sync::Arc;
use crate::enums::form_field::FormField;
use crate::enums::header_field::HeaderField;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::action_set::ActionSet;
use crate::structs::header_row::HeaderRow;
use crate::structs::header_rows::HeaderRows;
use crate::structs::webhook::Webhook;
use crate::structs::webhook_form::WebhookForm;
use crate::structs::webhook_payload::WebhookPayload;

/// Transient edit state for one webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    webhook_id: u64,
    form: WebhookForm,
    headers: HeaderRows,
    actions: ActionSet,
    send_for_all_actions: bool,
}

impl EditSession {
    /// Fresh session seeded from the record.
    pub fn from_webhook(webhook: &Webhook) -> Self {
        Self {
            webhook_id: webhook.id,
            form: WebhookForm::from(webhook),
            headers: HeaderRows::from_map(&webhook.headers),
            actions: ActionSet::from_keys(webhook.actions.iter().cloned()),
            send_for_all_actions: webhook.send_for_all_actions,
        }
    }

    /// Id of the record being edited.
    pub const fn webhook_id(&self) -> u64 {
        self.webhook_id
    }

    /// Plain fields as edited.
    pub const fn form(&self) -> &WebhookForm {
        &self.form
    }

    /// Header rows as edited.
    pub const fn headers(&self) -> &HeaderRows {
        &self.headers
    }

    /// Selected action keys.
    pub const fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Send-for-all as edited.
    pub const fn send_for_all_actions(&self) -> bool {
        self.send_for_all_actions
    }

    /// Base form fields merged with the header, action and send-for-all state.
    pub fn prepare_payload(&self) -> WebhookPayload {
        WebhookPayload {
            url: self.form.url.clone(),
            is_active: self.form.is_active,
            send_payload: self.form.send_payload,
            send_for_all_actions: self.send_for_all_actions,
            headers: self.headers.collapse(),
            actions: self.actions.to_list(),
        }
    }
}

/// The detail view's editor. Holds no session while nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailEditor {
    session: Option<EditSession>,
}

impl DetailEditor {
    /// An editor with nothing open.
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Reinitialises the edit state from `webhook`, or clears it.
    pub fn select(&mut self, webhook: Option<&Webhook>) {
        self.session = webhook.map(EditSession::from_webhook);
        match &self.session {
            Some(session) => log::debug!("Editing webhook {}", session.webhook_id),
            None => log::debug!("Edit session cleared"),
        }
    }

    /// The open session, if any.
    pub const fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Whether a webhook is being edited.
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    fn session_mut(&mut self) -> ConsoleResult<&mut EditSession> {
        self.session.as_mut().ok_or_else(|| {
            ConsoleError::user_input_error("edit", "a selected webhook", "Select a webhook before editing it")
        })
    }

    /// Returns whether a row was appended.
    pub fn add_header(&mut self) -> ConsoleResult<bool> {
        Ok(self.session_mut()?.headers.add_blank())
    }

    /// Removes and returns the row at `index`.
    pub fn remove_header(&mut self, index: usize) -> ConsoleResult<HeaderRow> {
        let session = self.session_mut()?;
        let len = session.headers.len();
        session
            .headers
            .remove(index)
            .ok_or_else(|| index_error(index, len))
    }

    /// Replaces the key or value of row `index`.
    pub fn edit_header(&mut self, field: HeaderField, index: usize, text: &str) -> ConsoleResult<()> {
        let session = self.session_mut()?;
        let len = session.headers.len();
        if session.headers.edit(field, index, text) {
            Ok(())
        } else {
            Err(index_error(index, len))
        }
    }

    /// Rows as they are now; later edits do not show up in it.
    pub fn header_snapshot(&self) -> Option<Arc<Vec<HeaderRow>>> {
        self.session.as_ref().map(|s| s.headers.snapshot())
    }

    /// Selects or clears one action key.
    pub fn toggle_action(&mut self, key: &str, checked: bool) -> ConsoleResult<()> {
        self.session_mut()?.actions.set(key, checked);
        Ok(())
    }

    /// The action set is kept as is, so turning the override off again
    /// restores the previous selection.
    pub fn set_send_for_all(&mut self, checked: bool) -> ConsoleResult<()> {
        self.session_mut()?.send_for_all_actions = checked;
        Ok(())
    }

    /// Writes one plain form field.
    pub fn edit_form(&mut self, field: FormField) -> ConsoleResult<()> {
        self.session_mut()?.form.apply(field);
        Ok(())
    }

    /// Full-record update body for the open session.
    pub fn prepare_payload(&self) -> ConsoleResult<(u64, WebhookPayload)> {
        let session = self.session.as_ref().ok_or_else(|| {
            ConsoleError::user_input_error("save", "a selected webhook", "Select a webhook before saving")
        })?;
        Ok((session.webhook_id, session.prepare_payload()))
    }
}

fn index_error(index: usize, len: usize) -> ConsoleError {
    ConsoleError::validation_error(
        "header index",
        &index.to_string(),
        &format!("must be lower than {}", len),
        None,
    )
}
