/// Runs one parsed subcommand.
pub mod command_runner;
