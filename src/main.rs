mod ui;

use cad_shapes::config::AppConfig;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    init_logging();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Konfiguration ungültig, verwende Standardwerte");
        AppConfig::default()
    });
    tracing::info!(
        drawing_dir = %config.drawing_dir.display(),
        fullscreen = config.fullscreen,
        "Starte CAD Formen"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_fullscreen(config.fullscreen)
            .with_title("Einfache CAD App für Formen"),
        ..Default::default()
    };

    eframe::run_native(
        "CAD Formen",
        options,
        Box::new(move |cc| {
            // Größere Schrift global einstellen
            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles = [
                (egui::TextStyle::Heading, egui::FontId::proportional(32.0)),
                (egui::TextStyle::Body, egui::FontId::proportional(20.0)),
                (egui::TextStyle::Monospace, egui::FontId::proportional(18.0)),
                (egui::TextStyle::Button, egui::FontId::proportional(22.0)),
                (egui::TextStyle::Small, egui::FontId::proportional(16.0)),
            ].into();

            // Größere Buttons und Inputs
            style.spacing.button_padding = egui::vec2(12.0, 8.0);
            style.spacing.item_spacing = egui::vec2(12.0, 10.0);
            style.spacing.interact_size = egui::vec2(50.0, 30.0);

            cc.egui_ctx.set_style(style);

            Ok(Box::new(ui::CadApp::new(config)))
        }),
    )
}

/// RUST_LOG steuert die Ausgabe, Standard ist "info"
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
