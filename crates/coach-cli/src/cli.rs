//! Command handlers driving the store.
//!
//! Each handler invokes store operations and renders the resulting state as
//! markdown. Store operations never fail, so the only errors surfaced here
//! come from rendering or from persisting settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use coach_core::{
    display::{ImportedCount, NextAction, OperationStatus, Transcript},
    Settings, Store,
};
use log::debug;

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Print the URL that grants access to the assignment provider
    Start,
    /// Store a session token and refresh the imported assignments
    Token(TokenArgs),
}

/// Deliver a session token obtained from the auth redirect
#[derive(Args)]
pub struct TokenArgs {
    #[arg(help = "Bearer token returned by the auth redirect")]
    pub token: String,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show,
    /// Persist new settings
    Set(SetConfigArgs),
}

/// Change persisted settings
#[derive(Args)]
pub struct SetConfigArgs {
    /// Use local stub content only (`true`) or consult the backend (`false`)
    #[arg(long)]
    pub use_stub_data: Option<bool>,
    /// Backend base address
    #[arg(long)]
    pub url: Option<String>,
}

/// Handler tying the store to the terminal.
pub struct Cli {
    store: Store,
    renderer: TerminalRenderer,
    settings_path: PathBuf,
}

impl Cli {
    pub fn new(store: Store, renderer: TerminalRenderer, settings_path: PathBuf) -> Self {
        Self {
            store,
            renderer,
            settings_path,
        }
    }

    /// Loads and prints the weekly plan with its best next action.
    pub async fn show_plan(&self) -> Result<()> {
        self.store.load_weekly_plan().await;
        let state = self.store.snapshot();

        let mut output = String::new();
        if let Some(plan) = state.weekly_plan() {
            output.push_str(&plan.to_string());
        }
        output.push('\n');
        output.push_str(&NextAction(state.best_next_action()).to_string());
        self.renderer.render(&output)
    }

    /// Prints only the best next action.
    pub async fn show_next(&self) -> Result<()> {
        self.store.load_weekly_plan().await;
        let state = self.store.snapshot();
        self.renderer
            .render(&NextAction(state.best_next_action()).to_string())
    }

    /// Sends each message in turn and prints the transcript.
    pub async fn chat(&self, messages: &[String]) -> Result<()> {
        self.store.load_weekly_plan().await;
        for message in messages {
            debug!("Sending chat message ({} chars)", message.len());
            self.store.send_user_message(message).await;
        }
        let state = self.store.snapshot();

        let mut output = Transcript(&state.thread).to_string();
        output.push('\n');
        output.push_str(&NextAction(state.best_next_action()).to_string());
        self.renderer.render(&output)
    }

    pub async fn health(&self) -> Result<()> {
        let status = if self.store.settings().use_stub_data() {
            OperationStatus::failure("Stub mode is on; the backend is not consulted")
        } else if self.store.check_health().await {
            OperationStatus::success(format!(
                "Backend at {} is healthy",
                self.store.settings().base_url()
            ))
        } else {
            OperationStatus::failure(format!(
                "Backend at {} is unavailable",
                self.store.settings().base_url()
            ))
        };
        self.renderer.render(&status.to_string())
    }

    pub async fn handle_auth_command(&self, command: AuthCommands) -> Result<()> {
        match command {
            AuthCommands::Start => {
                let status = match self.store.start_external_auth().await {
                    Some(url) => OperationStatus::success(format!("Open this URL to connect: {url}")),
                    None => OperationStatus::failure("External auth is unavailable"),
                };
                self.renderer.render(&status.to_string())
            }
            AuthCommands::Token(args) => {
                if args.token.trim().is_empty() {
                    return self
                        .renderer
                        .render(&OperationStatus::failure("Token must not be empty").to_string());
                }
                self.store.deliver_credential(&args.token).await;
                let state = self.store.snapshot();
                let output = format!(
                    "{}{}\n",
                    OperationStatus::success("Session token saved"),
                    ImportedCount(state.imported_assignments)
                );
                self.renderer.render(&output)
            }
        }
    }

    pub async fn assignments(&self) -> Result<()> {
        self.store.refresh_imported_assignments_count().await;
        let state = self.store.snapshot();
        self.renderer
            .render(&format!("{}\n", ImportedCount(state.imported_assignments)))
    }

    pub fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                let settings = self.store.settings().current();
                self.renderer.render(&format_settings(&settings))
            }
            ConfigCommands::Set(args) => {
                let mut settings = Settings::load(&self.settings_path)
                    .context("Failed to load settings")?;
                if let Some(use_stub_data) = args.use_stub_data {
                    settings.use_stub_data = use_stub_data;
                }
                if let Some(url) = args.url {
                    let trimmed = url.trim();
                    anyhow::ensure!(!trimmed.is_empty(), "Base URL must not be empty");
                    settings.base_url = trimmed.to_string();
                }
                settings
                    .save(&self.settings_path)
                    .context("Failed to save settings")?;

                let output = format!(
                    "{}\n{}",
                    OperationStatus::success(format!(
                        "Settings saved to {}",
                        self.settings_path.display()
                    )),
                    format_settings(&settings)
                );
                self.renderer.render(&output)
            }
        }
    }
}

fn format_settings(settings: &Settings) -> String {
    format!(
        "## Settings\n\n- Mode: {}\n- Base URL: {}\n",
        if settings.use_stub_data { "stub" } else { "live" },
        settings.base_url
    )
}
