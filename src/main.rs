#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod io;
mod model;
mod render;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ganttr=info")),
        )
        .init();

    let path = io::config_path();
    let (chart, startup_error) = match app::startup_chart(&path) {
        Ok(started) => started,
        Err(e) => {
            tracing::error!("cannot start with default settings: {}", e);
            std::process::exit(2);
        }
    };

    let size = chart.scene().size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size.x + 32.0, size.y + 90.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Ganttr"),
        ..Default::default()
    };

    eframe::run_native(
        "Ganttr",
        options,
        Box::new(|cc| Ok(Box::new(app::GanttrApp::new(cc, chart, startup_error)))),
    )
}
