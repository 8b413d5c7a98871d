use eframe::egui;
use tracing_subscriber::EnvFilter;
use twi_heritage::gui::TwiApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("twi_heritage=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Twi Practice")
            .with_inner_size([440.0, 780.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    tracing::info!("Starting Twi Practice");
    eframe::run_native("Twi Practice", options, Box::new(|cc| Ok(Box::new(TwiApp::new(cc)))))
}
