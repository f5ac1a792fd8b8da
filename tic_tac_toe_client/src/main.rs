mod config;
mod game_app;
mod game_service;

use crate::config::{AppConfig, PlayerConfig};
use crate::game_app::GameApp;
use crate::game_service::GameService;

use anyhow::{anyhow, Result};
use eframe::egui;
use tic_tac_toe_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);
    run(config)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the engine, wraps it in the UI service and hands both to the
/// event loop. Returns when the window closes.
fn run(config: AppConfig) -> Result<()> {
    let AppConfig {
        players,
        window_title,
        ..
    } = config;
    let [first, second] = players.map(PlayerConfig::into_player);

    let engine = GameEngine::new(first, second)?;
    let game_service = GameService::new(engine);
    let app = GameApp::new(game_service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title.as_str())
            .with_inner_size([440.0, 560.0]),
        ..Default::default()
    };

    info!("Opening window \"{}\"", window_title);

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("UI event loop failed: {}", e))
}
