mod backend_bridge;
mod controller;
mod ui;

use client_core::{load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{StartupConfig, TicketApp};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("failed to load settings, using defaults: {err:#}");
            Settings::default()
        }
    };
    let startup = StartupConfig {
        access_password: settings.access_password.clone(),
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Powerball Ticket")
            .with_inner_size([920.0, 760.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Powerball Ticket",
        options,
        Box::new(|_cc| Ok(Box::new(TicketApp::new(cmd_tx, ui_rx, startup)))),
    )
}
