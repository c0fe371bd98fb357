use android_activity::AndroidApp;
use eframe::NativeOptions;

use crate::log_capture;
use crate::lunar_settings_app::LunarSettingsApp;
use crate::Config;

// Android entry point
#[no_mangle]
pub fn android_main(app: AndroidApp) {
    let log_level = Config::new()
        .map(|config| config.load_log_level())
        .unwrap_or_default();
    log_capture::init_tracing(log_level);

    // Max level here, filtering is done by tracing
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Trace)
            .with_tag("LunarSettings"),
    );

    log::info!("Starting settings panels with egui");

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("PANIC OCCURRED: {}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic location: {}:{}", location.file(), location.line());
        }
    }));

    let options = NativeOptions {
        android_app: Some(app),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    match eframe::run_native(
        "Lunar Settings",
        options,
        Box::new(|_cc| Ok(Box::<LunarSettingsApp>::default())),
    ) {
        Ok(_) => log::info!("LunarSettingsApp exited successfully"),
        Err(e) => log::error!("LunarSettingsApp failed: {}", e),
    }
}
