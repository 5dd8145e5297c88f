//! CLI argument definitions for the Crosspost binary.

use clap::{Parser, Subcommand};
use crosspost::constants::DEFAULT_BASE_URL;

use crate::output::OutputFormat;

/// Manage the Nostr public keys linked to a cross-posting account
#[derive(Parser, Debug)]
#[command(name = "crosspost")]
#[command(about = "Crosspost: link Nostr public keys to your cross-posting account")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings shared by every command
#[derive(clap::Args, Debug)]
pub struct ClientArgs {
    /// Base URL of the cross-posting service
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "CROSSPOST_URL", global = true)]
    pub url: String,

    /// Session id from the `sessionID` cookie set after logging in
    #[arg(long, env = "CROSSPOST_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the URL to open in a browser to log in
    LoginUrl,
    /// Show the logged in account
    Whoami,
    /// End the current session
    Logout,
    /// Manage linked public keys
    #[command(subcommand)]
    Keys(KeysCommand),
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// List linked public keys
    List,
    /// Link a public key
    Add {
        /// Public key in npub form
        npub: String,
    },
    /// Unlink a public key
    Delete {
        /// Public key in npub form
        npub: String,
    },
}
