//! QuickDig: a small desktop DNS lookup tool.
//!
//! Thin egui front end over hickory-resolver: pick a nameserver and record
//! type, enter a domain, read the raw answer.

use tracing::info;

mod app;
mod lookup;
mod settings;
mod theme;
mod types;

use app::QuickDigApp;
use settings::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting QuickDig v{}", env!("CARGO_PKG_VERSION"));

    let settings_path = settings::settings_path();
    let settings = Settings::load_from(&settings_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("QuickDig")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_max_inner_size([1920.0, 1080.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QuickDig",
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx, settings.dark_mode);
            Ok(Box::new(QuickDigApp::new(settings, settings_path)))
        }),
    )?;

    Ok(())
}
