use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::page_event::PageEvent;
use crate::enums::page_view::PageView;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::helpers::update_helper::UpdateHelper;
use crate::services::http_webhook_api::HttpWebhookApi;
use crate::structs::action_info::ActionCatalog;
use crate::structs::config::config::Config;
use crate::structs::update_request::UpdateRequest;
use crate::structs::view::list_view::ListView;
use crate::structs::webhook::Webhook;
use crate::traits::webhook_api::WebhookApi;
use crate::ui::page_controller::PageController;
use crate::ui::page_server::PageServer;

/// Runs subcommands against the configured backend.
pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
}

impl CommandRunner {
    /// Runner reading config from `config_path`, or the default location.
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            start_time: None,
            config_path,
        }
    }

    /// Runs one subcommand and logs how long it took.
    pub async fn run_command(&mut self, command: Commands) -> ConsoleResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::List => self.list_command().await,
            Commands::Show { id } => self.show_command(id).await,
            Commands::Actions => self.actions_command().await,
            Commands::Create { url } => self.create_command(url).await,
            Commands::Update {
                id,
                url,
                active,
                send_payload,
                send_for_all,
                headers,
                remove_headers,
                actions,
                drop_actions,
            } => {
                let headers = headers
                    .iter()
                    .map(|arg| UpdateRequest::parse_header_arg(arg))
                    .collect::<ConsoleResult<Vec<_>>>()?;
                let request = UpdateRequest {
                    id,
                    url,
                    is_active: active,
                    send_payload,
                    send_for_all_actions: send_for_all,
                    headers,
                    remove_headers,
                    actions,
                    drop_actions,
                };
                self.update_command(&request).await
            }
            Commands::Delete { id } => self.delete_command(id).await,
            Commands::Serve { port, no_browser } => self.serve_command(port, no_browser).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> ConsoleResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    fn api(config: &Config) -> ConsoleResult<Arc<dyn WebhookApi>> {
        Ok(Arc::new(HttpWebhookApi::new(&config.api)?))
    }

    async fn mounted_controller(&self) -> ConsoleResult<PageController> {
        let config = self.load_config()?;
        let controller = PageController::new(Self::api(&config)?);
        controller.mount().await?;
        Ok(controller)
    }

    fn init_command(&self) -> ConsoleResult<()> {
        log::info!("🚀 Initializing webhook-console configuration...");
        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to point at your backend.", path.display());
        Ok(())
    }

    async fn list_command(&self) -> ConsoleResult<()> {
        let controller = self.mounted_controller().await?;
        match controller.view().await {
            PageView::List(list) => {
                Self::print_list(&list);
                Ok(())
            }
            other => Err(ConsoleError::system_error("list", &format!("unexpected page state {:?}", other))),
        }
    }

    async fn show_command(&self, id: u64) -> ConsoleResult<()> {
        let config = self.load_config()?;
        let api = Self::api(&config)?;
        let (webhook, info) = futures::join!(api.webhook(id), api.webhooks_info());
        Self::print_webhook(&webhook?, &info?);
        Ok(())
    }

    async fn actions_command(&self) -> ConsoleResult<()> {
        let config = self.load_config()?;
        let info = Self::api(&config)?.webhooks_info().await?;
        for (key, action) in &info {
            match &action.description {
                Some(description) => println!("{:<28} {} - {}", key, action.name, description),
                None => println!("{:<28} {}", key, action.name),
            }
        }
        Ok(())
    }

    async fn create_command(&self, url: String) -> ConsoleResult<()> {
        let controller = self.mounted_controller().await?;
        controller.dispatch(PageEvent::OpenCreate).await?;
        controller.dispatch(PageEvent::EditCreateUrl { url }).await?;

        let created = controller.create().await?;
        println!("✅ Created webhook {} for {}", created.id, created.url);
        Ok(())
    }

    async fn update_command(&self, request: &UpdateRequest) -> ConsoleResult<()> {
        if request.is_empty() {
            log::warn!("⚠️ Nothing to change; saving webhook {} as it is", request.id);
        }

        let controller = self.mounted_controller().await?;
        {
            let page = controller.page();
            let mut page = page.lock().await;
            UpdateHelper::apply(&mut page, request)?;
        }

        let updated = controller.save().await?;
        println!("✅ Saved webhook {}", updated.id);

        let page = controller.page();
        let page = page.lock().await;
        if let (Some(webhook), Some(info)) = (page.active_webhook(), page.webhooks_info()) {
            Self::print_webhook(webhook, info);
        }
        Ok(())
    }

    async fn delete_command(&self, id: u64) -> ConsoleResult<()> {
        let controller = self.mounted_controller().await?;
        controller.dispatch(PageEvent::SelectWebhook { id: Some(id) }).await?;
        controller.delete_active().await?;
        println!("🗑️ Deleted webhook {}", id);
        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>, no_browser: bool) -> ConsoleResult<()> {
        let config = self.load_config()?;
        let controller = Arc::new(PageController::new(Self::api(&config)?));
        controller.mount().await?;

        let mut server = PageServer::new(Arc::clone(&controller), config.server.clone());
        server.start(port).await?;

        if let Some(url) = server.url() {
            println!("🌐 Webhooks page: {}", url);
            if config.server.open_browser && !no_browser {
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("⚠️ Could not open a browser: {}", e);
                }
            }
        }

        println!("Press Ctrl+C to stop.");
        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    fn print_list(list: &ListView) {
        if list.webhooks.is_empty() {
            println!("No webhooks yet. Create one with `webhook-console create <url>`.");
            return;
        }

        for item in &list.webhooks {
            let status = if item.is_active { "●" } else { "○" };
            let scope = if item.send_for_all_actions {
                "all actions".to_string()
            } else {
                format!("{} actions", item.action_count)
            };
            println!("{} {:>5}  {}  ({})", status, item.id, item.url, scope);
        }
    }

    fn print_webhook(webhook: &Webhook, info: &ActionCatalog) {
        println!("Webhook {}", webhook.id);
        println!("  URL:            {}", webhook.url);
        println!("  Active:         {}", webhook.is_active);
        println!("  Send payload:   {}", webhook.send_payload);
        if let Some(updated_at) = webhook.updated_at {
            println!("  Updated:        {}", updated_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }

        if webhook.headers.is_empty() {
            println!("  Headers:        none");
        } else {
            println!("  Headers:");
            for (key, value) in &webhook.headers {
                println!("    {}: {}", key, value);
            }
        }

        if webhook.send_for_all_actions {
            println!("  Actions:        all");
        } else {
            println!("  Actions:");
            for key in &webhook.actions {
                let name = info.get(key).map_or(key.as_str(), |action| action.name.as_str());
                println!("    {} ({})", name, key);
            }
        }
    }
}
