use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AuthCommands, ConfigCommands};

/// Command-line front end for the coach weekly planner
///
/// Shows the weekly plan, chats with the coaching assistant and surfaces the
/// best next action. Works fully offline in stub mode; in live mode the
/// backend is consulted first and local content is used whenever it is
/// unavailable.
#[derive(Parser)]
#[command(version, about, name = "coach")]
pub struct Args {
    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/coach/settings.json
    #[arg(long, global = true)]
    pub settings_file: Option<PathBuf>,

    /// Path to the credentials file. Defaults to
    /// $XDG_DATA_HOME/coach/credentials.json
    #[arg(long, global = true)]
    pub credentials_file: Option<PathBuf>,

    /// Consult the backend for this invocation
    #[arg(long, global = true, conflicts_with = "stub")]
    pub live: bool,

    /// Use local stub content only for this invocation
    #[arg(long, global = true)]
    pub stub: bool,

    /// Backend base address for this invocation
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Stub-mode override requested on the command line, if any.
    pub fn mode_override(&self) -> Option<bool> {
        match (self.live, self.stub) {
            (true, _) => Some(false),
            (_, true) => Some(true),
            _ => None,
        }
    }
}

/// Available commands for the coach CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show this week's plan and the best next action
    #[command(alias = "p")]
    Plan,
    /// Send one or more messages to the coach
    #[command(alias = "c")]
    Chat {
        /// Messages to send, in order
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Show only the best next action
    #[command(alias = "n")]
    Next,
    /// Check whether the backend is reachable
    Health,
    /// Connect the external assignment provider
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Refresh and show the number of imported assignments
    Assignments,
    /// Inspect or change persisted settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
