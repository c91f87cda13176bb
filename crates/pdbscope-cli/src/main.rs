//! pdbscope CLI
//!
//! Protein structure dashboard and lookup tool.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use pdbscope_cli::config_handlers::handle_config_command;
use pdbscope_cli::{Cli, Command, commands, logging};
use pdbscope_core::{ConfigManager, PdbScopeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        // Config commands must work even when the file is missing or broken.
        Command::Config { action } => {
            logging::init(cli.verbose, "warn");
            handle_config_command(config_path, action)?;
        }
        command => {
            let config = PdbScopeConfig::load(config_path)?;
            logging::init(cli.verbose, &config.logging.level);
            tracing::debug!(?config_path, "configuration loaded");
            run(command, config).await?;
        }
    }
    Ok(())
}

async fn run(command: Command, config: PdbScopeConfig) -> pdbscope_cli::Result<()> {
    match command {
        Command::Serve { bind } => commands::cmd_serve(config, bind).await,
        Command::Summary { pdb_id, json } => commands::cmd_summary(&config, &pdb_id, json).await,
        Command::Scene {
            pdb_id,
            annotations_only,
        } => commands::cmd_scene(&config, &pdb_id, annotations_only).await,
        // Dispatched in main before the config is loaded.
        Command::Config { .. } => Ok(()),
    }
}
