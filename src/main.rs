//! RelayChat - a desktop client for WebSocket chat relays
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for the relay connection
//! - Communication via crossbeam channels

use clap::Parser;
use eframe::egui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use relaychat_client::app::RelayChatApp;
use relaychat_client::cli::Cli;
use relaychat_client::config::load_settings;

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = load_settings();
    cli.apply(&mut settings);
    tracing::info!(server = %settings.server_url, framing = settings.framing.as_str(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("RelayChat")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RelayChat",
        options,
        Box::new(|cc| Ok(Box::new(RelayChatApp::new(cc, settings)))),
    )
}
