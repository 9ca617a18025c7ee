mod app;
mod ui;

use eframe::egui;

use matrix_portfolio::config::{ParticleConfig, RelayConfig};

use crate::app::PortfolioApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LUCAS_HERBST \u{2014} Portfolio",
        options,
        Box::new(|cc| {
            let app = PortfolioApp::new(RelayConfig::default(), ParticleConfig::default());
            ui::install_style(&cc.egui_ctx, &app.theme);
            Ok(Box::new(app))
        }),
    )
    .expect("Failed to start portfolio");
}
