// Admin Dashboard
// Desktop entry point

use admin_dashboard::services::config::AppConfig;
use admin_dashboard::ui_egui::DashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Starting Admin Dashboard");

    let options = AppConfig::load_or_default().resolve();
    let [width, height] = options.window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Admin Dashboard")
            .with_inner_size([width, height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Admin Dashboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, options)))),
    )
}
