//! Command line options. Values given here override saved settings.

use clap::Parser;

use crate::config::Settings;
use crate::wire::Framing;

#[derive(Parser, Debug, Default)]
#[command(name = "relaychat-client", version, about = "Desktop client for WebSocket chat relays")]
pub struct Cli {
    /// Relay WebSocket URL (ws:// or wss://)
    #[arg(long)]
    pub server: Option<String>,

    /// Display name; skips the name prompt
    #[arg(long)]
    pub name: Option<String>,

    /// Wire framing spoken by the relay
    #[arg(long, value_enum)]
    pub framing: Option<Framing>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            settings.server_url = server.clone();
        }
        if let Some(name) = &self.name {
            settings.name = name.clone();
        }
        if let Some(framing) = self.framing {
            settings.framing = framing;
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "relaychat_client=debug"
        } else {
            "relaychat_client=info"
        }
    }
}
