// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod controller;
mod error;
mod file_utils;
mod input;
mod services;
mod startup;
mod state;
mod ui;

use controller::{AppStateController, CompletionPolicy, RayonSpawner};
use services::SystemClipboard;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let app = AppWindow::new()?;
    let controller =
        AppStateController::new(Arc::new(RayonSpawner), Arc::new(SystemClipboard::new()))
            .with_policy(CompletionPolicy::DiscardStale);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &controller);
    startup::configure_startup_opening(&app, &controller);

    app.run()?;

    Ok(())
}
