use clap::Subcommand;

/// Subcommands of `webhook-console`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// List webhooks
    List,
    /// Show one webhook
    Show {
        /// Webhook id
        id: u64,
    },
    /// List the action types webhooks can subscribe to
    Actions,
    /// Create a webhook for the given URL
    Create {
        /// URL the backend should post to
        url: String,
    },
    /// Edit a webhook and save the full record
    Update {
        /// Webhook id
        id: u64,
        /// New target URL
        #[clap(long)]
        url: Option<String>,
        /// Enable or disable the webhook
        #[clap(long)]
        active: Option<bool>,
        /// Post the event body
        #[clap(long)]
        send_payload: Option<bool>,
        /// Fire on every action
        #[clap(long)]
        send_for_all: Option<bool>,
        /// Set a header, as KEY=VALUE
        #[clap(long = "header")]
        headers: Vec<String>,
        /// Remove every header row with this key
        #[clap(long = "remove-header")]
        remove_headers: Vec<String>,
        /// Subscribe to an action key
        #[clap(long = "action")]
        actions: Vec<String>,
        /// Unsubscribe from an action key
        #[clap(long = "drop-action")]
        drop_actions: Vec<String>,
    },
    /// Delete a webhook
    Delete {
        /// Webhook id
        id: u64,
    },
    /// Serve the admin page locally
    Serve {
        /// Port to try first
        #[clap(short, long)]
        port: Option<u16>,
        /// Do not open a browser
        #[clap(long)]
        no_browser: bool,
    },
}
