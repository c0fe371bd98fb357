use eframe::egui;
use lunar_settings::log_capture;
use lunar_settings::{Config, LunarSettingsApp};

fn main() -> eframe::Result<()> {
    // Log level from the stored preference, overridable through RUST_LOG
    let log_level = Config::new()
        .map(|config| config.load_log_level())
        .unwrap_or_default();
    log_capture::init_tracing(log_level);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([412.0, 732.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lunar Settings",
        options,
        Box::new(|_cc| Ok(Box::<LunarSettingsApp>::default())),
    )
}
