//! Coach CLI Application
//!
//! Command-line front end for the coach weekly planner and chat assistant.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use coach_core::{FileCredentialStore, Settings, SharedSettings, StoreBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mode_override = args.mode_override();
    let Args {
        settings_file,
        credentials_file,
        base_url,
        no_color,
        command,
        ..
    } = args;

    let settings_path = match settings_file {
        Some(path) => path,
        None => Settings::default_path().context("Failed to locate settings file")?,
    };
    let credentials_path = match credentials_file {
        Some(path) => path,
        None => FileCredentialStore::default_path().context("Failed to locate credentials file")?,
    };

    let mut settings = Settings::load(&settings_path).context("Failed to load settings")?;
    if let Some(use_stub_data) = mode_override {
        settings.use_stub_data = use_stub_data;
    }
    let settings = SharedSettings::new(settings);
    if let Some(base_url) = base_url {
        settings
            .set_base_url(&base_url)
            .context("Invalid --base-url")?;
    }

    let store = StoreBuilder::new()
        .with_settings(settings)
        .with_credentials(Arc::new(FileCredentialStore::new(credentials_path)))
        .build()
        .context("Failed to initialize store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer, settings_path);

    info!("Coach started");

    match command {
        Some(Plan) | None => cli.show_plan().await,
        Some(Chat { messages }) => cli.chat(&messages).await,
        Some(Next) => cli.show_next().await,
        Some(Health) => cli.health().await,
        Some(Auth { command }) => cli.handle_auth_command(command).await,
        Some(Assignments) => cli.assignments().await,
        Some(Config { command }) => cli.handle_config_command(command),
    }
}
