pub mod health;
pub mod list;
pub mod show;
pub mod watch;

use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use proxylist_common::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RefreshPolicy};
use proxylist_core::network::GatewayClient;
use proxylist_core::ports::Transport;

#[derive(Parser)]
#[command(name = "proxylist")]
#[command(about = "Lists users and products served through the API gateway.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gateway origin the proxy paths are resolved against
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// What a refresh does to a request still in flight: last-response or latest-request
    #[arg(long, global = true, default_value_t = RefreshPolicy::LastResponseWins)]
    pub policy: RefreshPolicy,

    /// Hide banners, headers and summaries (repeat for less)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show loader logs (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Load users and products together, then print both lists
    #[command(alias = "s")]
    Show,
    /// Load and print the user list only
    #[command(alias = "u")]
    Users,
    /// Load and print the product list only
    #[command(alias = "p")]
    Products,
    /// Keep both lists on screen and refresh them on key presses
    #[command(alias = "w")]
    Watch,
    /// Ask the gateway whether it is healthy
    #[command(alias = "h")]
    Health,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> anyhow::Result<Config> {
        Ok(Config::new(
            &self.base_url,
            self.timeout,
            self.policy,
            self.quiet,
        )?)
    }
}

/// The transport every command talks to the gateway through.
pub fn gateway(cfg: &Config) -> anyhow::Result<Arc<dyn Transport>> {
    Ok(Arc::new(GatewayClient::new(cfg)?))
}
