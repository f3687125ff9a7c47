use crate::enums::page_event::PageEvent;
use crate::enums::page_view::PageView;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::action_info::ActionCatalog;
use crate::structs::create_modal::CreateModal;
use crate::structs::view::detail_view::{ActionToggle, DetailView};
use crate::structs::view::list_view::{CreateModalView, ListView, WebhookListItem};
use crate::structs::webhook::Webhook;
use crate::structs::webhook_payload::WebhookPayload;
use crate::ui::detail_editor::DetailEditor;

/// State of the webhooks page: the fetched collection and catalog, which
/// webhook is open, and the editor for it.
///
/// Every method runs to completion synchronously. Network effects live in
/// [`crate::ui::page_controller::PageController`], which feeds results back
/// through the `apply_*` methods.
#[derive(Debug, Default)]
pub struct WebhookPage {
    active_webhook_id: Option<u64>,
    webhooks: Option<Vec<Webhook>>,
    webhooks_info: Option<ActionCatalog>,
    editor: DetailEditor,
    create_modal: Option<CreateModal>,
    form_error: Option<String>,
}

impl WebhookPage {
    /// A page with nothing fetched yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both the collection and the catalog have arrived.
    pub const fn is_loaded(&self) -> bool {
        self.webhooks.is_some() && self.webhooks_info.is_some()
    }

    /// Id of the open webhook.
    pub const fn active_webhook_id(&self) -> Option<u64> {
        self.active_webhook_id
    }

    /// The fetched collection, empty before the first fetch.
    pub fn webhooks(&self) -> &[Webhook] {
        self.webhooks.as_deref().unwrap_or_default()
    }

    /// The action catalog once fetched.
    pub const fn webhooks_info(&self) -> Option<&ActionCatalog> {
        self.webhooks_info.as_ref()
    }

    /// The detail editor.
    pub const fn editor(&self) -> &DetailEditor {
        &self.editor
    }

    /// The create dialog while open.
    pub const fn create_modal(&self) -> Option<&CreateModal> {
        self.create_modal.as_ref()
    }

    /// Message shown above the detail form.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// The stored record behind the open detail view.
    pub fn active_webhook(&self) -> Option<&Webhook> {
        let id = self.active_webhook_id?;
        self.find_webhook(id)
    }

    fn find_webhook(&self, id: u64) -> Option<&Webhook> {
        self.webhooks().iter().find(|webhook| webhook.id == id)
    }

    /// Applies one user event.
    pub fn handle(&mut self, event: PageEvent) -> ConsoleResult<()> {
        log::debug!("Page event: {:?}", event);
        match event {
            PageEvent::SelectWebhook { id } => self.select_webhook(id),
            PageEvent::Back => {
                self.back();
                Ok(())
            }
            PageEvent::AddHeader => self.editor.add_header().map(|_| ()),
            PageEvent::RemoveHeader { index } => self.editor.remove_header(index).map(|_| ()),
            PageEvent::EditHeader { field, index, text } => self.editor.edit_header(field, index, &text),
            PageEvent::ToggleAction { key, checked } => self.editor.toggle_action(&key, checked),
            PageEvent::SetSendForAll { checked } => self.editor.set_send_for_all(checked),
            PageEvent::EditForm { field } => self.editor.edit_form(field),
            PageEvent::OpenCreate => {
                self.open_create();
                Ok(())
            }
            PageEvent::EditCreateUrl { url } => self.edit_create_url(&url),
            PageEvent::CloseCreate => {
                self.close_create();
                Ok(())
            }
        }
    }

    /// Switches to the detail view of `id`, or back to the list for `None`.
    /// The edit session is rebuilt from the record either way.
    pub fn select_webhook(&mut self, id: Option<u64>) -> ConsoleResult<()> {
        let Some(id) = id else {
            self.back();
            return Ok(());
        };

        let webhook = self.find_webhook(id).cloned().ok_or_else(|| ConsoleError::WebhookNotFound {
            id,
            available: self.webhooks().iter().map(|w| w.id).collect(),
        })?;

        self.active_webhook_id = Some(id);
        self.form_error = None;
        self.create_modal = None;
        self.editor.select(Some(&webhook));
        Ok(())
    }

    /// Returns to the list. The collection is kept; nothing is refetched.
    pub fn back(&mut self) {
        self.active_webhook_id = None;
        self.form_error = None;
        self.editor.select(None);
    }

    /// Replaces the collection. An open editor is rebuilt from the fresh
    /// record; if that record is gone the selection is dropped.
    pub fn apply_webhooks(&mut self, webhooks: Vec<Webhook>) {
        log::debug!("Received {} webhooks", webhooks.len());
        self.webhooks = Some(webhooks);

        if let Some(id) = self.active_webhook_id {
            match self.find_webhook(id).cloned() {
                Some(webhook) => self.editor.select(Some(&webhook)),
                None => {
                    log::warn!("⚠️ Webhook {} is no longer listed, returning to the list", id);
                    self.back();
                }
            }
        }
    }

    /// Stores the action catalog.
    pub fn apply_webhooks_info(&mut self, info: ActionCatalog) {
        self.webhooks_info = Some(info);
    }

    /// Sets or clears the detail form message.
    pub fn set_form_error(&mut self, message: Option<String>) {
        self.form_error = message;
    }

    /// Id and body for saving the open session.
    pub fn save_request(&self) -> ConsoleResult<(u64, WebhookPayload)> {
        self.editor.prepare_payload()
    }

    /// Opens an empty create dialog.
    pub fn open_create(&mut self) {
        self.create_modal = Some(CreateModal::default());
    }

    /// Closes the create dialog.
    pub fn close_create(&mut self) {
        self.create_modal = None;
    }

    /// Updates the URL typed into the dialog.
    pub fn edit_create_url(&mut self, url: &str) -> ConsoleResult<()> {
        let modal = self.create_modal.as_mut().ok_or_else(|| {
            ConsoleError::user_input_error("url", "an open \"New webhook\" dialog", "Open the dialog first")
        })?;
        modal.url = url.to_string();
        Ok(())
    }

    /// URL entered in the open create dialog.
    pub fn create_request(&self) -> ConsoleResult<String> {
        self.create_modal
            .as_ref()
            .map(|modal| modal.url.clone())
            .ok_or_else(|| {
                ConsoleError::user_input_error("create", "an open \"New webhook\" dialog", "Open the dialog first")
            })
    }

    /// Keeps the dialog open with the backend message.
    pub fn fail_create(&mut self, message: String) {
        if let Some(modal) = self.create_modal.as_mut() {
            modal.error = Some(message);
        }
    }

    /// Snapshot of what the page shows.
    pub fn view(&self) -> PageView {
        let (Some(webhooks), Some(info)) = (&self.webhooks, &self.webhooks_info) else {
            return PageView::Loading;
        };

        match self.editor.session() {
            Some(session) if self.active_webhook_id.is_some() => {
                let actions = if session.send_for_all_actions() {
                    None
                } else {
                    Some(
                        info.iter()
                            .map(|(key, action)| ActionToggle {
                                key: key.clone(),
                                name: action.name.clone(),
                                description: action.description.clone(),
                                checked: session.actions().contains(key),
                            })
                            .collect(),
                    )
                };

                PageView::Detail(DetailView {
                    webhook_id: session.webhook_id(),
                    form: session.form().clone(),
                    headers: session.headers().to_vec(),
                    send_for_all_actions: session.send_for_all_actions(),
                    actions,
                    error: self.form_error.clone(),
                })
            }
            _ => PageView::List(ListView {
                webhooks: webhooks.iter().map(WebhookListItem::from).collect(),
                create_modal: self.create_modal.as_ref().map(|modal| CreateModalView {
                    url: modal.url.clone(),
                    error: modal.error.clone(),
                }),
            }),
        }
    }
}
