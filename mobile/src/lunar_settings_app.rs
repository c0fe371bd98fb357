#![doc(hidden)]

use eframe::egui;

pub use crate::lunar_settings_app_stt::*;
use crate::dlg_apps_settings::DlgAppsSettings;
use crate::dlg_weather_settings::DlgWeatherSettings;
use crate::log_capture;
use crate::prefs_keys::{KEY_LOG_LEVEL, PREFS_LAUNCHER, PREFS_SETTINGS};
use crate::prefs_store::{MemoryPrefs, PreferenceStore, PrefsExt};
use crate::{Config, LogLevel};

fn open_store(config: Option<&Config>, scope: &str) -> Box<dyn PreferenceStore> {
    let Some(config) = config else {
        log::warn!("No config directory, keeping {} preferences in memory", scope);
        return Box::new(MemoryPrefs::new());
    };

    match config.open_prefs(scope) {
        Ok(prefs) => {
            log::info!("Using {} preferences at {:?}", scope, prefs.path());
            Box::new(prefs)
        }
        Err(e) => {
            log::error!("Failed to open {} preferences: {:#}", scope, e);
            Box::new(MemoryPrefs::new())
        }
    }
}

impl Default for LunarSettingsApp {
    fn default() -> Self {
        tracing::info!("=== System Information ===");
        tracing::info!("OS: {}", std::env::consts::OS);
        tracing::info!("Architecture: {}", std::env::consts::ARCH);

        let config = match Config::new() {
            Ok(config) => Some(config),
            Err(e) => {
                log::error!("Failed to set up config directories: {:#}", e);
                None
            }
        };

        let launcher_prefs = open_store(config.as_ref(), PREFS_LAUNCHER);
        let settings_prefs = open_store(config.as_ref(), PREFS_SETTINGS);

        Self::with_stores(config, launcher_prefs, settings_prefs)
    }
}

impl LunarSettingsApp {
    pub fn with_stores(
        config: Option<Config>,
        launcher_prefs: Box<dyn PreferenceStore>,
        settings_prefs: Box<dyn PreferenceStore>,
    ) -> Self {
        let log_level = LogLevel::from_name(&settings_prefs.get(&KEY_LOG_LEVEL));

        Self {
            config,
            launcher_prefs,
            settings_prefs,
            apps_settings: DlgAppsSettings::new(),
            weather_settings: DlgWeatherSettings::new(),
            log_level,
            show_logs: false,
        }
    }

    /// Where preferences are kept, shown under the title
    pub fn storage_location(&self) -> String {
        match &self.config {
            Some(config) => config.prefs_dir.display().to_string(),
            None => "in memory (not saved)".to_string(),
        }
    }

    fn sheet_open(&self) -> bool {
        self.apps_settings.open || self.weather_settings.open
    }

    pub fn open_apps_settings(&mut self) {
        if !self.sheet_open() {
            self.apps_settings.open(self.launcher_prefs.as_ref());
        }
    }

    pub fn open_weather_settings(&mut self) {
        if !self.sheet_open() {
            self.weather_settings.open(self.settings_prefs.as_ref());
        }
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
        log_capture::update_log_level(level);
        if let Err(e) = self
            .settings_prefs
            .put(&KEY_LOG_LEVEL, level.filter_directive().to_string())
        {
            log::error!("Failed to save log level: {:#}", e);
        }
    }

    fn settings_entry(ui: &mut egui::Ui, enabled: bool, title: &str, subtitle: &str) -> bool {
        let clicked = ui
            .add_enabled(
                enabled,
                egui::Button::new(egui::RichText::new(title).heading())
                    .frame(false)
                    .min_size(egui::vec2(ui.available_width(), 0.0)),
            )
            .clicked();
        ui.label(egui::RichText::new(subtitle).weak());
        ui.separator();
        clicked
    }

    fn show_log_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label("Log level");
            for level in LogLevel::ALL {
                if ui.selectable_label(self.log_level == level, level.label()).clicked()
                    && self.log_level != level
                {
                    self.set_log_level(level);
                }
            }
            ui.checkbox(&mut self.show_logs, "Show logs");
        });

        if self.show_logs {
            ui.add_space(8.0);
            if ui.button("Clear").clicked() {
                log_capture::clear_logs();
            }
            egui::ScrollArea::vertical()
                .id_salt("log_scroll")
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.monospace(log_capture::get_logs());
                });
        }
    }
}

impl eframe::App for LunarSettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sheets are panels and must be laid out before the central panel
        self.apps_settings.show(ctx, self.launcher_prefs.as_mut());
        self.weather_settings.show(ctx, self.settings_prefs.as_mut());

        let entries_enabled = !self.sheet_open();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lunar Settings");
            ui.label(egui::RichText::new(format!("Preferences: {}", self.storage_location())).weak());
            ui.add_space(12.0);

            if Self::settings_entry(
                ui,
                entries_enabled,
                "Apps",
                "Drawer layout, search, alignment and scrollbar",
            ) {
                self.open_apps_settings();
            }

            if Self::settings_entry(
                ui,
                entries_enabled,
                "Weather",
                "City, API key and temperature unit",
            ) {
                self.open_weather_settings();
            }

            ui.add_space(12.0);
            self.show_log_controls(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Text inputs are only persisted on dismiss
        if self.weather_settings.open {
            self.weather_settings.dismiss(self.settings_prefs.as_mut());
        }
    }
}
