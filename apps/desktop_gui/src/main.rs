use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::settings::{load_settings, CONFIG_FILE_NAME};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime},
    controller::events::UiEvent,
    ui::RufixApp,
};

#[derive(Debug, Parser)]
#[command(name = "rufix-gui", about = "Paint a cube and ask the solver service for a solution")]
struct Args {
    /// Settings file; defaults to ./rufix.toml, then the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Solver service base URL, e.g. http://127.0.0.1:5000/api
    #[arg(long)]
    server_url: Option<String>,
}

fn config_fallbacks() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("rufix").join(CONFIG_FILE_NAME));
    }
    paths
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref(), &config_fallbacks())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    let client = settings.build_client()?;
    tracing::info!(server_url = client.base_url(), "starting desktop gui");
    let server_url = client.base_url().to_string();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("RuFix")
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([520.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "RuFix",
        options,
        Box::new(move |_cc| Ok(Box::new(RufixApp::new(cmd_tx, ui_rx, server_url)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("desktop window failed")
}
