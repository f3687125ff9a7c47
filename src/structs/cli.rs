use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "webhook-console")]
#[clap(about = "Manage backend webhooks from the terminal or a local admin page", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}
